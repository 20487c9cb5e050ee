//! Company registry: the orchestration layer over storage, the relevance
//! gate and the search scorer

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::models::Company;
use crate::relevance::{RelevanceWeights, evaluate};
use crate::search::{ScoredCompany, SearchWeights, score_candidates};
use crate::storage::{CompanyFilter, CompanyStore};
use crate::{RegistryError, Result};

/// Validation messages surfaced to API clients
const NAME_REQUIRED: &str = "Company name is required.";
const NAME_TOO_SHORT: &str = "Company name must contain at least a few characters.";
const URL_INVALID: &str = "Website URL must be a valid, well-formed URL.";

/// Minimum trimmed length for a company name
const MIN_NAME_LEN: usize = 3;

/// A search request: exact-field filters plus an optional free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Case-insensitive substring filter on the company name
    pub name: Option<String>,

    /// Registrable-domain equality filter
    pub domain: Option<String>,

    /// Free-text query scored against name and domain tokens
    pub q: Option<String>,
}

/// Stateless orchestration over a [`CompanyStore`]
///
/// Holds the scoring configuration and the store handle; every call performs
/// one logical unit of work against immutable company snapshots, so a single
/// instance can be shared across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct CompanyRegistry {
    store: Arc<dyn CompanyStore>,
    relevance_weights: RelevanceWeights,
    search_weights: SearchWeights,
}

impl CompanyRegistry {
    /// Create a registry with default scoring configuration
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self::with_weights(store, RelevanceWeights::default(), SearchWeights::default())
    }

    /// Create a registry with explicit scoring configuration
    pub fn with_weights(
        store: Arc<dyn CompanyStore>,
        relevance_weights: RelevanceWeights,
        search_weights: SearchWeights,
    ) -> Self {
        Self {
            store,
            relevance_weights,
            search_weights,
        }
    }

    /// Register a company, gated on name/website relevance.
    ///
    /// Input-shape problems (blank or too-short name, malformed or
    /// non-http(s) URL) yield [`RegistryError::Validation`] before the
    /// evaluator runs. A failed relevance gate yields
    /// [`RegistryError::NotRelevant`] carrying the evaluation.
    pub async fn create(&self, name: &str, website_url: &str) -> Result<Company> {
        let name = name.trim();
        let raw_url = website_url.trim();

        if name.is_empty() {
            return Err(RegistryError::Validation(vec![NAME_REQUIRED.to_string()]));
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(RegistryError::Validation(vec![NAME_TOO_SHORT.to_string()]));
        }
        let url = parse_website_url(raw_url)
            .ok_or_else(|| RegistryError::Validation(vec![URL_INVALID.to_string()]))?;

        let evaluation = evaluate(name, &url, &self.relevance_weights)?;
        if !evaluation.is_relevant {
            warn!(
                company_name = name,
                score = evaluation.score,
                "company rejected by relevance gate"
            );
            return Err(RegistryError::NotRelevant(evaluation));
        }

        let company = Company::new(name, url)?;
        let stored = self.store.add(company).await?;
        info!(
            company_id = %stored.id,
            domain = %stored.website_domain,
            "company registered"
        );

        Ok(stored)
    }

    /// Get a company by id
    pub async fn get(&self, id: Uuid) -> Result<Option<Company>> {
        Ok(self.store.get(id).await?)
    }

    /// List all companies, newest first
    pub async fn list(&self) -> Result<Vec<Company>> {
        Ok(self.store.get_all().await?)
    }

    /// Search companies: exact-field filtering then free-text scoring.
    pub async fn search(&self, request: SearchRequest) -> Result<Vec<ScoredCompany>> {
        let filter = CompanyFilter {
            name_contains: request.name,
            domain_equals: request.domain,
        };
        let candidates = self.store.query(filter).await?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let query = request.q.as_deref().unwrap_or_default();
        let results = score_candidates(query, candidates, &self.search_weights);
        debug!(query, result_count = results.len(), "search scored");

        Ok(results)
    }
}

/// Parse a website URL, accepting only absolute http/https URLs.
fn parse_website_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => {
            if url.host_str().is_some() {
                Some(url)
            } else {
                None
            }
        }
        _ => None,
    }
}
