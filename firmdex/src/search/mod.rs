//! Free-text search scoring and ranking
//!
//! Candidates arrive already filtered by exact-field criteria (name-contains,
//! domain-equals); this module only applies free-text scoring and ordering.

pub mod calculator;
pub mod scoring;

pub use calculator::{NO_QUERY_REASON, ScoredCompany, score_candidates};
pub use scoring::SearchWeights;
