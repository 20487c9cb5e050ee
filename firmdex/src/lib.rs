//! # Firmdex
//!
//! Company registry core: decides at registration time whether a submitted
//! company name is plausibly associated with a submitted website, and ranks
//! stored companies against free-text queries.
//!
//! The interesting parts are four pure, stateless components:
//!
//! - **Tokenizer** ([`text::normalize`]) — deduplicated, order-preserving
//!   lowercase alphanumeric tokens from free text.
//! - **Domain extractor** ([`text::registrable_domain`]) — URL host with one
//!   leading `www.` stripped (deliberately not public-suffix-aware).
//! - **Relevance evaluator** ([`relevance::evaluate`]) — the creation-time
//!   gate: additive token/substring heuristics with a 0.7 threshold.
//! - **Search scorer** ([`search::score_candidates`]) — per-query ranking of
//!   pre-filtered candidates.
//!
//! Around them sit a [`models::Company`] snapshot model, a
//! [`storage::CompanyStore`] trait with an in-memory implementation, and the
//! [`core::CompanyRegistry`] orchestration type consumed by the HTTP server
//! crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use firmdex::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> firmdex::Result<()> {
//!     let registry = CompanyRegistry::new(Arc::new(InMemoryCompanyStore::new()));
//!
//!     // The relevance gate admits names that plausibly match the website.
//!     let company = registry.create("Example", "https://example.com").await?;
//!     assert_eq!(company.website_domain, "example.com");
//!
//!     // Free-text search ranks by score, newest-first on ties.
//!     let results = registry
//!         .search(SearchRequest { q: Some("example".into()), ..Default::default() })
//!         .await?;
//!     assert_eq!(results.len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod models;
pub mod relevance;
pub mod search;
pub mod storage;
pub mod text;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::core::{CompanyRegistry, SearchRequest};
    pub use crate::models::{Company, CompanyError};
    pub use crate::relevance::{RelevanceEvaluation, RelevanceWeights};
    pub use crate::search::{ScoredCompany, SearchWeights};
    pub use crate::storage::{CompanyFilter, CompanyStore, InMemoryCompanyStore, StorageError};
    pub use crate::{RegistryError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Input-shape validation failure: blank/short name, malformed URL.
    /// Raised before the relevance evaluator ever runs.
    #[error("company validation failed")]
    Validation(Vec<String>),

    /// The relevance gate rejected the name/website pairing. Carries the
    /// full evaluation so callers can surface the reasons.
    #[error("company name is not relevant to website URL")]
    NotRelevant(relevance::RelevanceEvaluation),

    /// Evaluator contract violation; a defect in the caller, not user input
    #[error(transparent)]
    Relevance(#[from] relevance::RelevanceError),

    /// Company construction failure
    #[error(transparent)]
    Company(#[from] models::CompanyError),

    /// Error during storage operations
    #[error(transparent)]
    Storage(#[from] storage::StorageError),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
