//! Token-based company/website relevance evaluation

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::relevance::weights::{RelevanceWeights, is_meaningful_token};
use crate::text::domain::{DomainError, domain_tokens, registrable_domain};
use crate::text::tokenize::normalize;

/// Outcome of a single relevance evaluation
///
/// Produced fresh on every call and never mutated or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceEvaluation {
    /// Whether the clamped score met the configured threshold
    pub is_relevant: bool,

    /// Clamped additive score in `[0.0, 1.0]`
    pub score: f64,

    /// Human-readable reasons for the score, in the order the rules fired
    pub reasons: Vec<String>,
}

/// Contract violations when invoking the evaluator
///
/// These are defects in the caller, not relevance outcomes: the creation
/// endpoint validates name and URL shape before the evaluator ever runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelevanceError {
    /// The company name was empty or whitespace-only
    #[error("company name is required")]
    EmptyCompanyName,

    /// The website URL could not produce a registrable domain
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Evaluate whether a company name is plausibly associated with a website URL.
///
/// The score is the clamped sum of four additive rules:
///
/// 1. A meaningful name token appears among the domain tokens (first such
///    token in name order wins).
/// 2. A domain token abbreviates the first name token plus a following one,
///    e.g. `firstam` for "First American".
/// 3. The *first* meaningful name token appears among the domain tokens. This
///    can stack with rule 1 on the same token.
/// 4. The full normalized company name is a substring of the alphanumeric
///    characters of the URL host.
///
/// If no rule fires the evaluation carries a single "no overlap" reason.
pub fn evaluate(
    company_name: &str,
    website_url: &Url,
    weights: &RelevanceWeights,
) -> Result<RelevanceEvaluation, RelevanceError> {
    if company_name.trim().is_empty() {
        return Err(RelevanceError::EmptyCompanyName);
    }

    let all_name_tokens = normalize(company_name);
    let meaningful_name_tokens: Vec<&str> = all_name_tokens
        .iter()
        .map(String::as_str)
        .filter(|t| is_meaningful_token(t))
        .collect();

    let domain = registrable_domain(website_url)?;
    // Keep the split order: the compound-abbreviation scan below must be
    // deterministic, so "first match" is defined by token position in the
    // domain, not by hash-set iteration order.
    let meaningful_domain_tokens: Vec<String> = domain_tokens(&domain)
        .into_iter()
        .filter(|t| is_meaningful_token(t))
        .collect();
    let domain_token_set: HashSet<&str> =
        meaningful_domain_tokens.iter().map(String::as_str).collect();

    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let Some(token) = meaningful_name_tokens
        .iter()
        .find(|t| domain_token_set.contains(**t))
    {
        score += weights.token_match;
        reasons.push(format!("Token match: {}", token));
    }

    if let Some(domain_token) =
        find_compound_abbreviation(&meaningful_domain_tokens, &meaningful_name_tokens)
    {
        score += weights.compound_abbreviation;
        reasons.push(format!("Compound abbreviation match: {}", domain_token));
    }

    if let Some(first) = meaningful_name_tokens.first() {
        if domain_token_set.contains(*first) {
            score += weights.first_token;
            reasons.push("Prefix match: first company token appears in domain.".to_string());
        }
    }

    let full_name: String = all_name_tokens.concat();
    let host_alphanumeric: String = website_url
        .host_str()
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    if !full_name.is_empty() && host_alphanumeric.contains(&full_name) {
        score += weights.full_name_host;
        reasons.push("Full normalized company name appears in website host.".to_string());
    }

    if reasons.is_empty() {
        reasons.push(
            "No meaningful token overlap between company name and website domain.".to_string(),
        );
    }

    let score = score.min(1.0);

    Ok(RelevanceEvaluation {
        is_relevant: score >= weights.relevance_threshold,
        score,
        reasons,
    })
}

/// Find a domain token that abbreviates the first name token plus a later one.
///
/// `firstam` matches "First American": the domain token starts with `first`
/// and the remainder `am` (at least two characters) is a prefix of a
/// subsequent name token. Domain tokens are scanned in domain order; the
/// first hit wins.
fn find_compound_abbreviation<'a>(
    domain_tokens: &'a [String],
    name_tokens: &[&str],
) -> Option<&'a str> {
    if name_tokens.len() < 2 {
        return None;
    }

    let first = name_tokens[0];
    if first.chars().count() < 3 {
        return None;
    }

    for domain_token in domain_tokens {
        let Some(remainder) = domain_token.strip_prefix(first) else {
            continue;
        };
        if remainder.chars().count() < 2 {
            continue;
        }
        if name_tokens[1..].iter().any(|t| t.starts_with(remainder)) {
            return Some(domain_token);
        }
    }

    None
}
