use crate::core::context::detection::{
    detect_identifier_style, has_percent_escape, has_query_unsafe_chars,
    has_surrounding_whitespace, letter_case, looks_like_url, word_count, IdentifierStyle,
    LetterCase,
};
use crate::core::transform::{self, TransformationKind};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionResponse, TransformPayload};
use super::{required_str, FeatureAsync, FeatureContext, FeatureSync};
use std::collections::HashMap;
use async_trait::async_trait;

/// Strong signal: the text is clearly in the source format
const BOOST_STRONG: f64 = 80.0;
/// Weak signal: the transformation is plausible
const BOOST_WEAK: f64 = 30.0;

/// Query strings longer than this are unlikely to be encode targets
const MAX_ENCODE_CANDIDATE_LENGTH: usize = 200;

#[derive(Clone)]
pub struct TextTransformFeature;

/// Palette command id for a transformation
pub fn command_id(kind: TransformationKind) -> String {
    format!("transform_{}", kind.id())
}

impl FeatureSync for TextTransformFeature {
    fn id(&self) -> &str {
        "text_transform"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_transform_picker".to_string(),
            label: "Transform Text".to_string(),
            description: Some("Pick a transformation for the selected text".to_string()),
            icon: Some("wand.and.stars".to_string()),
            action_type: None,
            widget_type: Some("transform_picker".to_string()),
            category: None,
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        TransformationKind::ALL
            .into_iter()
            .map(|kind| CommandItem {
                id: command_id(kind),
                label: kind.display_name().to_string(),
                description: Some(kind.description().to_string()),
                icon: Some(kind.icon().to_string()),
                action_type: Some(ActionType::TransformText(TransformPayload {
                    transformation: kind,
                })),
                widget_type: None,
                category: None,
            })
            .collect()
    }

    fn get_context_boost(&self, captured_text: &str) -> HashMap<String, f64> {
        suggest_transformations(captured_text)
            .into_iter()
            .map(|(kind, score)| (command_id(kind), score))
            .collect()
    }
}

/// Score the transformations that would plausibly help with `text`.
///
/// Transformations that would leave the text unchanged are never suggested.
pub fn suggest_transformations(text: &str) -> Vec<(TransformationKind, f64)> {
    let mut scores: Vec<(TransformationKind, f64)> = Vec::new();
    if text.trim().is_empty() {
        return scores;
    }

    if has_percent_escape(text) {
        scores.push((TransformationKind::UrlDecode, BOOST_STRONG));
    } else if looks_like_url(text) {
        scores.push((TransformationKind::UrlEncode, BOOST_WEAK));
    } else if has_query_unsafe_chars(text) && text.len() <= MAX_ENCODE_CANDIDATE_LENGTH {
        scores.push((TransformationKind::UrlEncode, BOOST_WEAK / 2.0));
    }

    if has_surrounding_whitespace(text) {
        scores.push((TransformationKind::TrimWhitespace, BOOST_STRONG));
    }

    match detect_identifier_style(text) {
        Some(IdentifierStyle::Snake) | Some(IdentifierStyle::Kebab) => {
            scores.push((TransformationKind::CamelCase, BOOST_STRONG));
            scores.push((TransformationKind::SnakeCase, BOOST_WEAK));
            scores.push((TransformationKind::KebabCase, BOOST_WEAK));
        }
        Some(IdentifierStyle::Camel) | Some(IdentifierStyle::Pascal) => {
            scores.push((TransformationKind::SnakeCase, BOOST_STRONG));
            scores.push((TransformationKind::KebabCase, BOOST_WEAK));
            scores.push((TransformationKind::CamelCase, BOOST_WEAK));
        }
        None if word_count(text) > 1 => {
            scores.push((TransformationKind::TitleCase, BOOST_WEAK));
        }
        None => {}
    }

    match letter_case(text) {
        Some(LetterCase::Lower) => scores.push((TransformationKind::UppercaseCase, BOOST_WEAK)),
        Some(LetterCase::Upper) => scores.push((TransformationKind::LowercaseCase, BOOST_WEAK)),
        Some(LetterCase::Mixed) => {
            scores.push((TransformationKind::LowercaseCase, BOOST_WEAK / 2.0));
            scores.push((TransformationKind::UppercaseCase, BOOST_WEAK / 2.0));
        }
        None => {}
    }

    scores.retain(|(kind, _)| transform::apply(*kind, text) != text);
    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scores
}

#[async_trait]
impl FeatureAsync for TextTransformFeature {
    async fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
        _ctx: &FeatureContext,
    ) -> AppResult<ExecuteActionResponse> {
        let kind = match action {
            ActionType::TransformText(payload) => payload.transformation,
            _ => return Err(AppError::Unsupported),
        };

        let text = required_str(params, "text")?;
        let result = transform::apply(kind, text);
        let changed = result != text;

        Ok(ExecuteActionResponse {
            metadata: Some(serde_json::json!({
                "transformation": kind,
                "changed": changed,
            })),
            result,
        })
    }
}
