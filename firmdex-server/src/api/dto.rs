//! Data Transfer Objects for the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use firmdex::models::Company;
use firmdex::search::ScoredCompany;

/// Company DTO for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub company_name: String,

    /// Absolute website URL
    pub website_url: String,

    /// Registrable domain derived from the website URL
    pub website_domain: String,

    /// When the company was registered
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            company_name: company.name,
            website_url: company.website_url.to_string(),
            website_domain: company.website_domain,
            created_at: company.created_at,
        }
    }
}

/// Request to register a new company
///
/// Fields are optional at the wire level so that missing values surface as
/// field-keyed validation messages rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCompanyRequest {
    /// Company display name
    pub company_name: Option<String>,

    /// Absolute http/https website URL
    pub website_url: Option<String>,
}

/// Query parameters for company search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Case-insensitive substring filter on the company name
    pub name: Option<String>,

    /// Registrable-domain equality filter
    pub domain: Option<String>,

    /// Free-text query scored against name and domain tokens
    pub q: Option<String>,
}

/// A search hit: the company plus its per-query score and reasons
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchResultDto {
    pub company: CompanyDto,
    pub relevance_score: f64,
    pub score_reasons: Vec<String>,
}

impl From<ScoredCompany> for CompanySearchResultDto {
    fn from(scored: ScoredCompany) -> Self {
        Self {
            company: CompanyDto::from(scored.company),
            relevance_score: scored.score,
            score_reasons: scored.reasons,
        }
    }
}
