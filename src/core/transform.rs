//! Text transformations
//!
//! A closed set of stateless string operations applied to clipboard text.
//! Every operation is total: it never fails and never touches shared state,
//! so `apply` can be called from any thread without coordination.
//!
//! - `case`: upper/lower/title and the word-joining cases (camel, snake, kebab)
//! - `words`: the word splitter shared by the joining cases
//! - `url`: percent-encoding with silent fallback to the input

pub mod case;
pub mod url;
pub mod words;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::shared::error::AppError;

/// Named transformation applied to a text entry.
///
/// Declaration order is the display order of the picker; `ALL` mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings.ts")]
pub enum TransformationKind {
    #[serde(rename = "uppercase")]
    UppercaseCase,
    #[serde(rename = "lowercase")]
    LowercaseCase,
    TitleCase,
    CamelCase,
    SnakeCase,
    KebabCase,
    TrimWhitespace,
    UrlEncode,
    UrlDecode,
}

impl TransformationKind {
    pub const ALL: [TransformationKind; 9] = [
        TransformationKind::UppercaseCase,
        TransformationKind::LowercaseCase,
        TransformationKind::TitleCase,
        TransformationKind::CamelCase,
        TransformationKind::SnakeCase,
        TransformationKind::KebabCase,
        TransformationKind::TrimWhitespace,
        TransformationKind::UrlEncode,
        TransformationKind::UrlDecode,
    ];

    /// Stable identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            TransformationKind::UppercaseCase => "uppercase",
            TransformationKind::LowercaseCase => "lowercase",
            TransformationKind::TitleCase => "title_case",
            TransformationKind::CamelCase => "camel_case",
            TransformationKind::SnakeCase => "snake_case",
            TransformationKind::KebabCase => "kebab_case",
            TransformationKind::TrimWhitespace => "trim_whitespace",
            TransformationKind::UrlEncode => "url_encode",
            TransformationKind::UrlDecode => "url_decode",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TransformationKind::UppercaseCase => "UPPERCASE",
            TransformationKind::LowercaseCase => "lowercase",
            TransformationKind::TitleCase => "Title Case",
            TransformationKind::CamelCase => "camelCase",
            TransformationKind::SnakeCase => "snake_case",
            TransformationKind::KebabCase => "kebab-case",
            TransformationKind::TrimWhitespace => "Trim Whitespace",
            TransformationKind::UrlEncode => "URL Encode",
            TransformationKind::UrlDecode => "URL Decode",
        }
    }

    /// SF Symbols name rendered next to the entry in the picker.
    pub fn icon(self) -> &'static str {
        match self {
            TransformationKind::UppercaseCase => "textformat.size.larger",
            TransformationKind::LowercaseCase => "textformat.size.smaller",
            TransformationKind::TitleCase => "textformat",
            TransformationKind::CamelCase => "character.cursor.ibeam",
            TransformationKind::SnakeCase => "underscore",
            TransformationKind::KebabCase => "minus",
            TransformationKind::TrimWhitespace => "scissors",
            TransformationKind::UrlEncode => "link.badge.plus",
            TransformationKind::UrlDecode => "link",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TransformationKind::UppercaseCase => "Convert every letter to upper case",
            TransformationKind::LowercaseCase => "Convert every letter to lower case",
            TransformationKind::TitleCase => "Capitalize the first letter of each word",
            TransformationKind::CamelCase => "Join words as camelCase",
            TransformationKind::SnakeCase => "Join words with underscores",
            TransformationKind::KebabCase => "Join words with hyphens",
            TransformationKind::TrimWhitespace => "Remove leading and trailing whitespace",
            TransformationKind::UrlEncode => "Percent-encode for use in a URL query",
            TransformationKind::UrlDecode => "Decode %XX escapes",
        }
    }

    /// Apply this transformation to `text`.
    pub fn apply(self, text: &str) -> String {
        apply(self, text)
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TransformationKind {
    type Err = AppError;

    /// Accepts the id in any case, with `-` or `_` as separator
    /// (`snake_case`, `SNAKE-CASE`), plus a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let kind = match normalized.as_str() {
            "uppercase" | "upper" | "upper_case" => TransformationKind::UppercaseCase,
            "lowercase" | "lower" | "lower_case" => TransformationKind::LowercaseCase,
            "title_case" | "title" => TransformationKind::TitleCase,
            "camel_case" | "camel" => TransformationKind::CamelCase,
            "snake_case" | "snake" => TransformationKind::SnakeCase,
            "kebab_case" | "kebab" => TransformationKind::KebabCase,
            "trim_whitespace" | "trim" => TransformationKind::TrimWhitespace,
            "url_encode" | "encode" => TransformationKind::UrlEncode,
            "url_decode" | "decode" => TransformationKind::UrlDecode,
            _ => {
                return Err(AppError::Validation(format!(
                    "Unknown transformation '{}'",
                    s
                )))
            }
        };
        Ok(kind)
    }
}

/// Apply `kind` to `text`, returning the transformed string.
pub fn apply(kind: TransformationKind, text: &str) -> String {
    match kind {
        TransformationKind::UppercaseCase => text.to_uppercase(),
        TransformationKind::LowercaseCase => text.to_lowercase(),
        TransformationKind::TitleCase => case::title_case(text),
        TransformationKind::CamelCase => case::camel_case(text),
        TransformationKind::SnakeCase => case::snake_case(text),
        TransformationKind::KebabCase => case::kebab_case(text),
        TransformationKind::TrimWhitespace => text.trim().to_string(),
        TransformationKind::UrlEncode => url::encode(text),
        TransformationKind::UrlDecode => url::decode(text),
    }
}

pub fn display_name(kind: TransformationKind) -> &'static str {
    kind.display_name()
}

pub fn icon(kind: TransformationKind) -> &'static str {
    kind.icon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_declaration_order() {
        let mut sorted = TransformationKind::ALL;
        sorted.sort();
        assert_eq!(sorted, TransformationKind::ALL);
        assert_eq!(TransformationKind::ALL[0], TransformationKind::UppercaseCase);
        assert_eq!(TransformationKind::ALL[8], TransformationKind::UrlDecode);
    }

    #[test]
    fn test_id_matches_serde() {
        for kind in TransformationKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.id().to_string()));
        }
    }

    #[test]
    fn test_from_str_round_trips_ids() {
        for kind in TransformationKind::ALL {
            assert_eq!(kind.id().parse::<TransformationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("KEBAB-CASE".parse::<TransformationKind>().unwrap(), TransformationKind::KebabCase);
        assert_eq!(" trim ".parse::<TransformationKind>().unwrap(), TransformationKind::TrimWhitespace);
        assert_eq!("url-decode".parse::<TransformationKind>().unwrap(), TransformationKind::UrlDecode);
        assert!("reverse".parse::<TransformationKind>().is_err());
    }

    #[test]
    fn test_display_lookup() {
        assert_eq!(display_name(TransformationKind::CamelCase), "camelCase");
        assert_eq!(icon(TransformationKind::UrlDecode), "link");
        assert_eq!(TransformationKind::TitleCase.to_string(), "Title Case");
    }

    #[test]
    fn test_empty_input_is_unchanged_for_every_kind() {
        for kind in TransformationKind::ALL {
            assert_eq!(apply(kind, ""), "", "{:?}", kind);
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(apply(TransformationKind::CamelCase, "hello_world"), "helloWorld");
        assert_eq!(apply(TransformationKind::SnakeCase, "HelloWorld"), "hello_world");
        assert_eq!(apply(TransformationKind::KebabCase, "some URL string"), "some-url-string");
        assert_eq!(apply(TransformationKind::UrlEncode, "a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_upper_lower_idempotent() {
        let samples = ["Hello World", "straße", "ÀÉÎ õü", "mixed_Case-42", "  "];
        for kind in [TransformationKind::UppercaseCase, TransformationKind::LowercaseCase] {
            for s in samples {
                let once = apply(kind, s);
                assert_eq!(apply(kind, &once), once, "{:?} on {:?}", kind, s);
            }
        }
    }

    #[test]
    fn test_upper_leaves_non_letters() {
        assert_eq!(apply(TransformationKind::UppercaseCase, "abc 123 !?"), "ABC 123 !?");
        assert_eq!(apply(TransformationKind::LowercaseCase, "ABC 123 !?"), "abc 123 !?");
    }

    #[test]
    fn test_trim_keeps_interior() {
        let out = apply(TransformationKind::TrimWhitespace, " \n\t a  b\nc \r\n");
        assert_eq!(out, "a  b\nc");
    }

    #[test]
    fn test_method_matches_free_function() {
        assert_eq!(TransformationKind::SnakeCase.apply("fooBar"), apply(TransformationKind::SnakeCase, "fooBar"));
    }
}
