//! Text normalization primitives shared by relevance evaluation and search

pub mod domain;
pub mod tokenize;

pub use domain::{DomainError, domain_tokens, registrable_domain};
pub use tokenize::normalize;
