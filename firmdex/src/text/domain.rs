//! Registrable-domain extraction and domain tokenization
//!
//! The registrable domain here is deliberately simple: the URL host with one
//! leading `www.` removed. It is not a public-suffix-aware eTLD+1 resolver.

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::text::tokenize::normalize;

/// Error type for domain extraction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The URL has no host component (e.g. `mailto:` or a path-only URL).
    /// Callers are expected to admit only absolute http/https URLs, so this
    /// signals a broken contract upstream rather than bad user input.
    #[error("website URL has no host component")]
    MissingHost,
}

/// Extract the registrable domain from an absolute URL.
///
/// The host is lowercased and a single leading `"www."` is stripped. No
/// recursive stripping, no suffix-list resolution.
///
/// # Example
///
/// ```
/// use url::Url;
/// use firmdex::text::registrable_domain;
///
/// let url = Url::parse("https://www.Example.com/about").unwrap();
/// assert_eq!(registrable_domain(&url).unwrap(), "example.com");
/// ```
pub fn registrable_domain(url: &Url) -> Result<String, DomainError> {
    let host = url.host_str().ok_or(DomainError::MissingHost)?;
    let host = host.trim().to_lowercase();

    Ok(match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    })
}

/// Split a registrable domain into normalized tokens.
///
/// The domain is split on `.` and `-`, each fragment is run through
/// [`normalize`], and the flattened result is deduplicated while preserving
/// first-appearance order. The preserved order is what makes "first match"
/// semantics downstream deterministic rather than dependent on hash-set
/// iteration order.
pub fn domain_tokens(domain: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for fragment in domain.split(['.', '-']) {
        for token in normalize(fragment) {
            if seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
    }

    tokens
}
