use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Longest prefix the detectors look at
pub const MAX_INPUT_LENGTH: usize = 1000;

/// Naming convention of a single-token identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierStyle {
    Snake,
    Kebab,
    Camel,
    Pascal,
}

/// Letter casing of the alphabetic characters in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
    Mixed,
}

/// Truncate on a char boundary at or below `MAX_INPUT_LENGTH` bytes
pub fn truncate_input(text: &str) -> &str {
    if text.len() <= MAX_INPUT_LENGTH {
        return text;
    }
    let mut end = MAX_INPUT_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

pub fn has_percent_escape(text: &str) -> bool {
    static ESCAPE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ESCAPE_REGEX.get_or_init(|| {
        Regex::new(r"%[0-9A-Fa-f]{2}").expect("valid percent escape regex")
    });
    re.is_match(truncate_input(text))
}

pub fn looks_like_url(text: &str) -> bool {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = URL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$").expect("valid url regex")
    });
    re.is_match(truncate_input(text).trim())
}

/// Characters that need escaping inside a query string value
pub fn has_query_unsafe_chars(text: &str) -> bool {
    truncate_input(text)
        .chars()
        .any(|c| matches!(c, ' ' | '&' | '?' | '=' | '#' | '+' | '/'))
}

pub fn has_surrounding_whitespace(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.len() != text.len()
}

/// Detect the naming style of a single-token identifier.
///
/// Returns `None` for text with whitespace, non-identifier characters, or
/// no style markers at all (`plain`).
pub fn detect_identifier_style(text: &str) -> Option<IdentifierStyle> {
    static IDENT_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = IDENT_REGEX.get_or_init(|| {
        Regex::new(r"^[\p{L}][\p{L}\p{N}_\-]*[\p{L}\p{N}]$").expect("valid identifier regex")
    });

    let token = truncate_input(text).trim();
    if !re.is_match(token) {
        return None;
    }

    if token.contains('_') {
        return Some(IdentifierStyle::Snake);
    }
    if token.contains('-') {
        return Some(IdentifierStyle::Kebab);
    }

    let has_hump = token
        .chars()
        .zip(token.chars().skip(1))
        .any(|(a, b)| a.is_lowercase() && b.is_uppercase());
    if !has_hump {
        return None;
    }

    match token.chars().next() {
        Some(c) if c.is_uppercase() => Some(IdentifierStyle::Pascal),
        _ => Some(IdentifierStyle::Camel),
    }
}

pub fn letter_case(text: &str) -> Option<LetterCase> {
    let mut has_lower = false;
    let mut has_upper = false;
    for c in truncate_input(text).chars().filter(|c| c.is_alphabetic()) {
        has_lower |= c.is_lowercase();
        has_upper |= c.is_uppercase();
    }
    match (has_lower, has_upper) {
        (true, false) => Some(LetterCase::Lower),
        (false, true) => Some(LetterCase::Upper),
        (true, true) => Some(LetterCase::Mixed),
        (false, false) => None,
    }
}

/// UAX #29 word count
pub fn word_count(text: &str) -> usize {
    truncate_input(text).unicode_words().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundary() {
        let text = "é".repeat(MAX_INPUT_LENGTH);
        let truncated = truncate_input(&text);
        assert!(truncated.len() <= MAX_INPUT_LENGTH);
        assert_eq!(truncated.chars().count(), MAX_INPUT_LENGTH / 2);
    }

    #[test]
    fn test_percent_escape() {
        assert!(has_percent_escape("hello%20world"));
        assert!(!has_percent_escape("100% done"));
    }

    #[test]
    fn test_url() {
        assert!(looks_like_url("https://example.com/a?b=c"));
        assert!(looks_like_url("  ftp://host/file  "));
        assert!(!looks_like_url("not a url"));
        assert!(!looks_like_url("https://has space.com"));
    }

    #[test]
    fn test_identifier_styles() {
        assert_eq!(detect_identifier_style("user_id"), Some(IdentifierStyle::Snake));
        assert_eq!(detect_identifier_style("user-id"), Some(IdentifierStyle::Kebab));
        assert_eq!(detect_identifier_style("userId"), Some(IdentifierStyle::Camel));
        assert_eq!(detect_identifier_style("UserId"), Some(IdentifierStyle::Pascal));
        assert_eq!(detect_identifier_style("plain"), None);
        assert_eq!(detect_identifier_style("two words"), None);
        assert_eq!(detect_identifier_style("trailing_"), None);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(has_surrounding_whitespace("  padded"));
        assert!(has_surrounding_whitespace("line\n"));
        assert!(!has_surrounding_whitespace("tight"));
        assert!(!has_surrounding_whitespace("   "));
    }

    #[test]
    fn test_letter_case() {
        assert_eq!(letter_case("abc 1"), Some(LetterCase::Lower));
        assert_eq!(letter_case("ABC!"), Some(LetterCase::Upper));
        assert_eq!(letter_case("Abc"), Some(LetterCase::Mixed));
        assert_eq!(letter_case("123"), None);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("The quick brown fox."), 4);
        assert_eq!(word_count(""), 0);
    }
}
