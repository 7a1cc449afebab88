//! Context category detection and mapping
//!
//! Single source of truth for which kind of text a capture is and which
//! kind of text each action is meant for.

use crate::core::transform::TransformationKind;
use crate::shared::types::{ActionType, ClipboardAction};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::detection::{
    detect_identifier_style, has_percent_escape, has_surrounding_whitespace, looks_like_url,
};

/// Context categories for content detection and action filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "bindings.ts")]
pub enum ContextCategory {
    /// A single absolute URL
    Url,
    /// Text containing %XX escapes
    Encoded,
    /// A code identifier (snake_case, kebab-case, camelCase)
    Identifier,
    /// Text padded with leading or trailing whitespace
    Whitespace,
    /// Prose
    Text,
    /// Anything else, and history management
    General,
}

/// Detect content category from text.
///
/// Checks run from most to least specific; the first match wins.
pub fn detect_content_category(text: &str) -> Option<ContextCategory> {
    if has_percent_escape(text) {
        return Some(ContextCategory::Encoded);
    }
    if looks_like_url(text) {
        return Some(ContextCategory::Url);
    }
    if detect_identifier_style(text).is_some() {
        return Some(ContextCategory::Identifier);
    }
    if has_surrounding_whitespace(text) {
        return Some(ContextCategory::Whitespace);
    }
    if text.chars().any(|c| c.is_alphabetic()) && text.len() > 2 {
        return Some(ContextCategory::Text);
    }

    None
}

/// Map ActionType to ContextCategory
pub fn get_action_category(action: &ActionType) -> Option<ContextCategory> {
    match action {
        ActionType::TransformText(payload) => Some(get_transformation_category(payload.transformation)),
        ActionType::ClipboardAction(payload) => match payload.action {
            ClipboardAction::TransformEntry(kind) => Some(get_transformation_category(kind)),
            ClipboardAction::ClearHistory | ClipboardAction::DeleteEntry => Some(ContextCategory::General),
        },
    }
}

pub fn get_transformation_category(kind: TransformationKind) -> ContextCategory {
    match kind {
        TransformationKind::UrlEncode => ContextCategory::Url,
        TransformationKind::UrlDecode => ContextCategory::Encoded,
        TransformationKind::CamelCase
        | TransformationKind::SnakeCase
        | TransformationKind::KebabCase => ContextCategory::Identifier,
        TransformationKind::TrimWhitespace => ContextCategory::Whitespace,
        TransformationKind::UppercaseCase
        | TransformationKind::LowercaseCase
        | TransformationKind::TitleCase => ContextCategory::Text,
    }
}

/// Get category for widget type
pub fn get_widget_category(widget_type: &str) -> Option<ContextCategory> {
    match widget_type {
        "transform_picker" => Some(ContextCategory::Text),
        "clipboard" => Some(ContextCategory::General),
        _ => None,
    }
}
