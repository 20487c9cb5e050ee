//! Company model representing a registered company

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::text::domain::{DomainError, registrable_domain};

/// Error type for company construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    /// The company name was empty or whitespace-only
    #[error("company name cannot be empty")]
    EmptyName,

    /// The website URL could not produce a registrable domain
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A registered company
///
/// The registrable domain is derived from the website URL at construction
/// time and kept alongside it, so search never has to re-parse the URL.
/// Instances are immutable snapshots; scoring only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier
    pub id: Uuid,

    /// Display name, trimmed
    pub name: String,

    /// Absolute http/https website URL
    pub website_url: Url,

    /// Registrable domain derived from the website URL
    pub website_domain: String,

    /// When the company was registered
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a company with a fresh id and the current timestamp.
    pub fn new(name: &str, website_url: Url) -> Result<Self, CompanyError> {
        Self::with_metadata(Uuid::new_v4(), name, website_url, Utc::now())
    }

    /// Create a company with explicit id and creation time.
    ///
    /// Used by tests and by callers reconstructing a stored snapshot.
    pub fn with_metadata(
        id: Uuid,
        name: &str,
        website_url: Url,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CompanyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CompanyError::EmptyName);
        }

        let website_domain = registrable_domain(&website_url)?;

        Ok(Self {
            id,
            name: name.to_string(),
            website_url,
            website_domain,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_registrable_domain_from_url() {
        let url = Url::parse("https://www.Example.com/about").unwrap();
        let company = Company::new("Example", url).unwrap();

        assert_eq!(company.website_domain, "example.com");
        assert_eq!(company.name, "Example");
    }

    #[test]
    fn trims_the_name() {
        let url = Url::parse("https://example.com").unwrap();
        let company = Company::new("  Example  ", url).unwrap();

        assert_eq!(company.name, "Example");
    }

    #[test]
    fn rejects_blank_name() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(Company::new("   ", url), Err(CompanyError::EmptyName));
    }

    #[test]
    fn with_metadata_keeps_the_given_timestamp() {
        let url = Url::parse("https://example.com").unwrap();
        let created_at = "2026-01-03T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let company =
            Company::with_metadata(Uuid::new_v4(), "Example", url, created_at).unwrap();

        assert_eq!(company.created_at, created_at);
    }
}
