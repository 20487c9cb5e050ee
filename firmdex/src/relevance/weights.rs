//! Relevance scoring weights and the stop-word table
//!
//! The weights and the stop-word set are configuration data rather than
//! literals buried in scoring code, so the taxonomy and thresholds stay
//! independently testable and tunable.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static! {
    /// Tokens that carry no signal for name/domain matching: URL scaffolding,
    /// generic TLD fragments and legal-entity suffixes.
    static ref NON_MEANINGFUL_TOKENS: HashSet<&'static str> = HashSet::from([
        "www", "com", "net", "org", "co", "io", "ai", "inc", "llc", "ltd", "corp", "company",
    ]);
}

/// Minimum length for a token to count as meaningful.
const MIN_MEANINGFUL_LEN: usize = 3;

/// Whether a normalized token is meaningful for matching purposes.
///
/// A meaningful token has at least three characters and is not in the fixed
/// stop-word set of generic/legal/domain-suffix words.
pub fn is_meaningful_token(token: &str) -> bool {
    token.chars().count() >= MIN_MEANINGFUL_LEN && !NON_MEANINGFUL_TOKENS.contains(token)
}

/// Configuration for the additive relevance score
///
/// All weights stack; the summed score is clamped to 1.0 before the threshold
/// comparison. Note that the token-match and first-token weights can both fire
/// for the same token. That stacking is intentional weighting, not a bug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceWeights {
    /// Weight for any meaningful name token appearing in the domain tokens.
    /// Default: 0.7
    pub token_match: f64,

    /// Weight for a domain token that abbreviates two name tokens, e.g.
    /// `firstam` for "First American". Default: 0.7
    pub compound_abbreviation: f64,

    /// Weight for the first meaningful name token appearing in the domain
    /// tokens. Default: 0.2
    pub first_token: f64,

    /// Weight for the full normalized company name appearing as a substring
    /// of the URL host. Default: 0.1
    pub full_name_host: f64,

    /// Minimum clamped score for a company to pass the gate. Default: 0.7
    pub relevance_threshold: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            token_match: 0.7,
            compound_abbreviation: 0.7,
            first_token: 0.2,
            full_name_host: 0.1,
            relevance_threshold: 0.7,
        }
    }
}

impl RelevanceWeights {
    /// Create a configuration with default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    ///
    /// All weights must be >= 0.0 and the threshold must lie in (0.0, 1.0].
    pub fn validate(&self) -> Result<(), String> {
        if self.token_match < 0.0 {
            return Err("token_match must be >= 0.0".to_string());
        }
        if self.compound_abbreviation < 0.0 {
            return Err("compound_abbreviation must be >= 0.0".to_string());
        }
        if self.first_token < 0.0 {
            return Err("first_token must be >= 0.0".to_string());
        }
        if self.full_name_host < 0.0 {
            return Err("full_name_host must be >= 0.0".to_string());
        }
        if self.relevance_threshold <= 0.0 || self.relevance_threshold > 1.0 {
            return Err("relevance_threshold must be in (0.0, 1.0]".to_string());
        }

        Ok(())
    }
}
