//! Creation-time relevance gate
//!
//! Decides whether a submitted company name is plausibly associated with a
//! submitted website URL, using deterministic token and substring heuristics.
//! No fuzzy matching, no edit distance, no learned model.

pub mod evaluator;
pub mod weights;

pub use evaluator::{RelevanceError, RelevanceEvaluation, evaluate};
pub use weights::{RelevanceWeights, is_meaningful_token};
