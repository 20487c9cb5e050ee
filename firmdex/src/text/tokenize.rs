//! Free-text tokenization
//!
//! Turns arbitrary text into a deduplicated, order-preserving sequence of
//! lowercase alphanumeric tokens. This is the shared vocabulary for both the
//! relevance gate and the search scorer, so it lives in one place.

use std::collections::HashSet;

/// Normalize free text into lowercase alphanumeric tokens.
///
/// Lowercases first, then treats every character that is not a Unicode letter
/// or digit as a separator. Duplicate tokens are removed; the first occurrence
/// determines position. Empty or whitespace-only input yields an empty vector.
///
/// # Example
///
/// ```
/// use firmdex::text::normalize;
///
/// let tokens = normalize("Acme, Inc. (ACME)");
/// assert_eq!(tokens, vec!["acme", "inc"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for raw in lowered.split(|c: char| !c.is_alphanumeric()) {
        if raw.is_empty() {
            continue;
        }
        if seen.insert(raw.to_string()) {
            tokens.push(raw.to_string());
        }
    }

    tokens
}
