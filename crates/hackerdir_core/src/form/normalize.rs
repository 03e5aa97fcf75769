//! Input normalization shared by the forms.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid scheme regex"));

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Splits a comma-separated interest string into trimmed, non-empty tags.
///
/// Relative order of the surviving tags is preserved; duplicates are kept.
pub fn parse_interests(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims a URL and prefixes `https://` when it carries no `scheme://`.
///
/// Idempotent: normalizing an already-normalized URL returns it unchanged.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || URL_SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

/// Normalizes an optional URL field: blank input yields `None`.
pub fn normalize_optional_url(input: &str) -> Option<String> {
    let normalized = normalize_url(input);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Trims free text; blank input yields `None`.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
