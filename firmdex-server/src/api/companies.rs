//! Company registration and search endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use firmdex::core::SearchRequest;

use crate::{
    api::dto::{CompanyDto, CompanySearchResultDto, CreateCompanyRequest, SearchParams},
    error::{ServerError, ServerResult, not_found},
    state::AppState,
};

/// Register a new company
///
/// Request shape is validated here (field-keyed messages); the business
/// relevance gate runs inside the registry and surfaces under the `company`
/// key. Returns 201 with the stored company on success.
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCompanyRequest>,
) -> ServerResult<(StatusCode, Json<CompanyDto>)> {
    let company_name = request.company_name.as_deref().unwrap_or_default().trim().to_string();
    let website_url = request.website_url.as_deref().unwrap_or_default().trim().to_string();

    info!(%company_name, %website_url, "create company request received");

    let field_errors = validate_create_request(&company_name, &website_url);
    if !field_errors.is_empty() {
        warn!(
            error_count = field_errors.values().map(Vec::len).sum::<usize>(),
            "create company request failed shape validation"
        );
        return Err(ServerError::Validation { errors: field_errors });
    }

    let company = state.registry.create(&company_name, &website_url).await?;
    info!(company_id = %company.id, domain = %company.website_domain, "company created");

    Ok((StatusCode::CREATED, Json(CompanyDto::from(company))))
}

/// Search companies by exact filters and an optional free-text query
pub async fn search_companies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ServerResult<Json<Vec<CompanySearchResultDto>>> {
    info!(
        name = ?params.name,
        domain = ?params.domain,
        q = ?params.q,
        "company search request received"
    );

    let results = state
        .registry
        .search(SearchRequest {
            name: params.name,
            domain: params.domain,
            q: params.q.clone(),
        })
        .await?;

    info!(count = results.len(), "company search returned results");
    if params.q.is_some() {
        for result in results.iter().take(5) {
            debug!(
                company_id = %result.company.id,
                score = result.score,
                reasons = %result.reasons.join("; "),
                "scored search hit"
            );
        }
    }

    Ok(Json(results.into_iter().map(CompanySearchResultDto::from).collect()))
}

/// Get a company by id
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<CompanyDto>> {
    let company = state
        .registry
        .get(id)
        .await?
        .ok_or_else(|| not_found("Company", id.to_string()))?;

    Ok(Json(CompanyDto::from(company)))
}

/// Validate the request shape before the relevance gate runs.
///
/// Mirrors the registry's own checks but reports per-field so the UI can
/// attach messages to inputs.
fn validate_create_request(
    company_name: &str,
    website_url: &str,
) -> HashMap<String, Vec<String>> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();

    if company_name.is_empty() {
        errors
            .entry("companyName".to_string())
            .or_default()
            .push("Company name is required.".to_string());
    } else if company_name.chars().count() < 3 {
        errors
            .entry("companyName".to_string())
            .or_default()
            .push("Company name must contain at least a few characters.".to_string());
    }

    if !is_valid_website_url(website_url) {
        errors
            .entry("websiteUrl".to_string())
            .or_default()
            .push("Website URL must be a valid, well-formed URL.".to_string());
    }

    errors
}

/// Whether the raw string is an absolute http/https URL with a host.
fn is_valid_website_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
