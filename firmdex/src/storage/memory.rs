//! In-memory company store backed by a concurrent map

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use url::Url;
use uuid::Uuid;

use crate::models::Company;
use crate::storage::errors::StorageError;
use crate::storage::traits::{CompanyFilter, CompanyStore};
use crate::text::domain::registrable_domain;

/// In-memory [`CompanyStore`] implementation
///
/// Safe for concurrent create/read from any number of request handlers.
/// Data lives for the lifetime of the process; durability is out of scope.
#[derive(Debug, Default)]
pub struct InMemoryCompanyStore {
    companies: DashMap<Uuid, Company>,
}

impl InMemoryCompanyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot_newest_first(&self) -> Vec<Company> {
        let mut companies: Vec<Company> =
            self.companies.iter().map(|entry| entry.value().clone()).collect();
        companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        companies
    }

    /// Normalize a domain filter value to a registrable domain.
    ///
    /// Accepts either a full URL or a bare host, mirroring what callers are
    /// likely to paste into a `domain=` query parameter.
    fn normalize_domain_filter(domain: &str) -> Option<String> {
        let candidate = domain.trim();
        if candidate.is_empty() {
            return None;
        }

        if let Ok(url) = Url::parse(candidate) {
            if let Ok(domain) = registrable_domain(&url) {
                return Some(domain);
            }
        }

        let candidate = candidate.to_lowercase();
        Some(match candidate.strip_prefix("www.") {
            Some(stripped) => stripped.to_string(),
            None => candidate,
        })
    }
}

#[async_trait]
impl CompanyStore for InMemoryCompanyStore {
    async fn add(&self, company: Company) -> Result<Company, StorageError> {
        match self.companies.entry(company.id) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists(company.id)),
            Entry::Vacant(slot) => {
                slot.insert(company.clone());
                Ok(company)
            }
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<Company>, StorageError> {
        Ok(self.companies.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<Company>, StorageError> {
        Ok(self.snapshot_newest_first())
    }

    async fn query(&self, filter: CompanyFilter) -> Result<Vec<Company>, StorageError> {
        let name_contains = filter
            .name_contains
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let domain_equals = filter
            .domain_equals
            .as_deref()
            .and_then(Self::normalize_domain_filter);

        let companies = self
            .snapshot_newest_first()
            .into_iter()
            .filter(|company| match &name_contains {
                Some(needle) => company.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|company| match &domain_equals {
                Some(domain) => company.website_domain.eq_ignore_ascii_case(domain),
                None => true,
            })
            .collect();

        Ok(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn company(name: &str, url: &str, created_at: &str) -> Company {
        Company::with_metadata(
            Uuid::new_v4(),
            name,
            Url::parse(url).unwrap(),
            created_at.parse::<DateTime<Utc>>().unwrap(),
        )
        .unwrap()
    }

    async fn seeded_store() -> InMemoryCompanyStore {
        let store = InMemoryCompanyStore::new();
        store.add(company("Acme Labs", "https://labs.example.com", "2026-01-01T00:00:00Z")).await.unwrap();
        store.add(company("Acme Systems", "https://systems.example.com", "2026-01-02T00:00:00Z")).await.unwrap();
        store.add(company("Acme", "https://www.acme.com", "2026-01-03T00:00:00Z")).await.unwrap();
        store
    }

    #[tokio::test]
    async fn add_then_get_roundtrips() {
        let store = InMemoryCompanyStore::new();
        let stored = store
            .add(company("Example", "https://example.com", "2026-01-01T00:00:00Z"))
            .await
            .unwrap();

        let fetched = store.get(stored.id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn add_rejects_duplicate_id() {
        let store = InMemoryCompanyStore::new();
        let first = store
            .add(company("Example", "https://example.com", "2026-01-01T00:00:00Z"))
            .await
            .unwrap();

        let duplicate = Company::with_metadata(
            first.id,
            "Example Again",
            Url::parse("https://example.com").unwrap(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(
            store.add(duplicate).await,
            Err(StorageError::AlreadyExists(first.id))
        );
    }

    #[tokio::test]
    async fn get_all_orders_newest_first() {
        let store = seeded_store().await;
        let all = store.get_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Acme Systems", "Acme Labs"]);
    }

    #[tokio::test]
    async fn query_filters_by_name_substring_case_insensitive() {
        let store = seeded_store().await;
        let filter = CompanyFilter {
            name_contains: Some("aCmE s".to_string()),
            ..Default::default()
        };

        let results = store.query(filter).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Acme Systems");
    }

    #[tokio::test]
    async fn query_filters_by_domain_equality() {
        let store = seeded_store().await;
        let filter = CompanyFilter {
            domain_equals: Some("acme.com".to_string()),
            ..Default::default()
        };

        let results = store.query(filter).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Acme");
    }

    #[tokio::test]
    async fn domain_filter_accepts_url_or_www_host() {
        let store = seeded_store().await;

        for raw in ["https://www.acme.com/about", "www.acme.com", "ACME.com"] {
            let filter = CompanyFilter {
                domain_equals: Some(raw.to_string()),
                ..Default::default()
            };
            let results = store.query(filter).await.unwrap();
            assert_eq!(results.len(), 1, "filter value: {raw}");
            assert_eq!(results[0].website_domain, "acme.com");
        }
    }

    #[tokio::test]
    async fn blank_filters_match_everything() {
        let store = seeded_store().await;
        let filter = CompanyFilter {
            name_contains: Some("   ".to_string()),
            domain_equals: Some("".to_string()),
        };

        let results = store.query(filter).await.unwrap();
        assert_eq!(results.len(), 3);
    }
}
