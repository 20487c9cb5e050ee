//! Search scoring configuration

use serde::{Deserialize, Serialize};

/// Configuration for free-text search scoring
///
/// Each query token contributes the name weight when it matches a company
/// name token and the domain weight when it matches a domain token; a single
/// token can contribute both. The per-candidate total is clamped to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchWeights {
    /// Weight added per query token found among the company's name tokens.
    /// Default: 0.6
    pub name_token: f64,

    /// Weight added per query token found among the company's domain tokens.
    /// Default: 0.4
    pub domain_token: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            name_token: 0.6,
            domain_token: 0.4,
        }
    }
}

impl SearchWeights {
    /// Create a configuration with default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name_token < 0.0 {
            return Err("name_token must be >= 0.0".to_string());
        }
        if self.domain_token < 0.0 {
            return Err("domain_token must be >= 0.0".to_string());
        }

        Ok(())
    }
}
