use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static CASE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

/// lower-case letter directly followed by an upper-case letter
fn case_boundary() -> &'static Regex {
    CASE_BOUNDARY.get_or_init(|| {
        Regex::new(r"(\p{Ll})(\p{Lu})").expect("Invalid case boundary regex")
    })
}

/// Split `text` into words for the joining cases.
///
/// Boundaries are a lower→upper case hump (`camelCase` → `camel Case`),
/// any `_` or `-`, and whitespace. Empty segments are dropped; words keep
/// their original casing and order.
pub fn split_words(text: &str) -> Vec<String> {
    let spaced: Cow<'_, str> = case_boundary().replace_all(text, "$1 $2");
    spaced
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
