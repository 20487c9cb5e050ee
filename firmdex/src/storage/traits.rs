//! Trait definitions for company storage

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Company;
use crate::storage::errors::StorageError;

/// Exact-field filter criteria for repository queries
///
/// Free-text scoring happens downstream in the search module; the store only
/// applies these exact/substring criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Case-insensitive substring match against the company name
    pub name_contains: Option<String>,

    /// Case-insensitive equality match against the registrable domain.
    /// The filter value is normalized before comparison: an absolute URL is
    /// reduced to its registrable domain, a bare host has one leading `www.`
    /// stripped.
    pub domain_equals: Option<String>,
}

/// Trait for company storage implementations
///
/// All listing operations return companies ordered by creation time
/// descending (newest first); scoring relies on that ordering contract.
#[async_trait]
pub trait CompanyStore: Send + Sync + Debug {
    /// Store a new company, rejecting duplicate ids
    async fn add(&self, company: Company) -> Result<Company, StorageError>;

    /// Get a company by its id
    async fn get(&self, id: Uuid) -> Result<Option<Company>, StorageError>;

    /// List all companies, newest first
    async fn get_all(&self) -> Result<Vec<Company>, StorageError>;

    /// List companies matching the filter, newest first
    async fn query(&self, filter: CompanyFilter) -> Result<Vec<Company>, StorageError>;
}
