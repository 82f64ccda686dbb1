//! Guest name extraction from the signature

use crate::patterns::NAME_REGEX;

/// Extract the signer's name that follows the first closing phrase
///
/// Matching is case-insensitive, but the returned name is sliced from the
/// original text so its capitalization survives.
#[must_use]
pub fn extract_name(text: &str) -> Option<String> {
    NAME_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
}
