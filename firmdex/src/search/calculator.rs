//! Per-candidate search scoring and result ordering

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Company;
use crate::search::scoring::SearchWeights;
use crate::text::domain::domain_tokens;
use crate::text::tokenize::normalize;

/// Reason attached to every candidate when no free-text query was supplied
pub const NO_QUERY_REASON: &str = "No free-text query supplied; returning filtered results.";

/// A candidate company with its per-query score and reasons
///
/// Transient: recomputed for every search request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCompany {
    /// The candidate, as read from the repository
    pub company: Company,

    /// Clamped score in `[0.0, 1.0]`
    pub score: f64,

    /// Human-readable reasons, in query-token order
    pub reasons: Vec<String>,
}

/// Score and rank candidates against a free-text query.
///
/// Candidates are assumed to be pre-filtered by exact-field criteria and to
/// arrive newest-created-first.
///
/// - A blank query returns every candidate unscored, in incoming order, with
///   a single [`NO_QUERY_REASON`].
/// - A query that normalizes to zero tokens (pure punctuation) returns an
///   empty list. Deliberate policy, not an error.
/// - Otherwise each query token adds the name weight if it matches a name
///   token and the domain weight if it matches a domain token; candidates
///   with no matches are dropped, scores are clamped to 1.0, and results are
///   ordered by score descending then creation time descending.
pub fn score_candidates(
    query: &str,
    candidates: Vec<Company>,
    weights: &SearchWeights,
) -> Vec<ScoredCompany> {
    if query.trim().is_empty() {
        return candidates
            .into_iter()
            .map(|company| ScoredCompany {
                company,
                score: 0.0,
                reasons: vec![NO_QUERY_REASON.to_string()],
            })
            .collect();
    }

    let query_tokens = normalize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for company in candidates {
        let name_tokens: HashSet<String> = normalize(&company.name).into_iter().collect();
        let company_domain_tokens: HashSet<String> =
            domain_tokens(&company.website_domain).into_iter().collect();

        let mut score = 0.0;
        let mut reasons = Vec::new();

        for token in &query_tokens {
            if name_tokens.contains(token) {
                score += weights.name_token;
                reasons.push(format!("Name token match: {}", token));
            }
            if company_domain_tokens.contains(token) {
                score += weights.domain_token;
                reasons.push(format!("Domain token match: {}", token));
            }
        }

        if score <= 0.0 {
            continue;
        }

        scored.push(ScoredCompany {
            company,
            score: score.min(1.0),
            reasons,
        });
    }

    // Stable sort: candidates arrive newest-first, so equal (score, created_at)
    // pairs keep the repository's ordering and the result is a total order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.company.created_at.cmp(&a.company.created_at))
    });

    scored
}
