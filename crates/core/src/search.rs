//! Search helpers: tsquery construction, keyword normalization, and
//! pagination clamps shared by the repository and API layers.

use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of search results per page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of search results per page.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Default number of autocomplete suggestions.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: i64 = 10;

/// Maximum number of autocomplete suggestions.
pub const MAX_AUTOCOMPLETE_LIMIT: i64 = 25;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Sanitize user input into a list of terms suitable for tsquery construction.
///
/// - Splits on whitespace.
/// - Strips non-alphanumeric characters (except `_`) from each term.
/// - Drops empty terms.
///
/// Returns `None` if the input yields no usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Sanitize and convert user input into a PostgreSQL `tsquery` string.
///
/// Whitespace-separated terms are joined with `&` (AND); empty or
/// whitespace-only input returns `None`.
pub fn build_tsquery(query: &str) -> Option<String> {
    sanitize_terms(query).map(|terms| terms.join(" & "))
}

/// Build a prefix tsquery for autocomplete / search-as-you-type.
///
/// Appends `:*` to the last term for prefix matching.
pub fn build_prefix_tsquery(query: &str) -> Option<String> {
    let terms = sanitize_terms(query)?;

    if terms.len() == 1 {
        return Some(format!("{}:*", terms[0]));
    }

    // All terms except last are exact, last term gets prefix match.
    let exact = &terms[..terms.len() - 1];
    let prefix = terms[terms.len() - 1];
    Some(format!("{} & {}:*", exact.join(" & "), prefix))
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Keyword normalization
// ---------------------------------------------------------------------------

/// Normalize a title into the autocomplete search field: lowercase with
/// every non-alphanumeric character removed except single spaces.
pub fn normalize_keyword(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_was_space = false;
        } else if c.is_whitespace() && !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    out.trim_end().to_string()
}

/// Strip punctuation that trails a word (`"ltd.,"` -> `"ltd"`), used when
/// flattening scalar values into the full-text document body.
pub fn strip_trailing_punct(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"([^\w\s]|_)+(\s|$)").expect("static pattern"));
    re.replace_all(s, "$2").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
