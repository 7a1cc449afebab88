use serde::{Deserialize, Serialize};
use ts_rs::TS;
use chrono::{DateTime, Utc};
use unicode_segmentation::UnicodeSegmentation;

use crate::core::context::category::ContextCategory;
use crate::core::transform::TransformationKind;

/// Preview length in graphemes
const PREVIEW_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TransformTextRequest {
    pub text: String,
    pub transformation: TransformationKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TransformTextResponse {
    pub result: String,
    pub transformation: TransformationKind,
    /// False when the output equals the input (nothing to do, or a masked
    /// encode/decode failure)
    pub changed: bool,
}

/// One row of the transformation picker
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TransformationInfo {
    pub id: String,
    pub kind: TransformationKind,
    pub label: String,
    pub icon: String,
    pub description: String,
}

impl From<TransformationKind> for TransformationInfo {
    fn from(kind: TransformationKind) -> Self {
        Self {
            id: kind.id().to_string(),
            kind,
            label: kind.display_name().to_string(),
            icon: kind.icon().to_string(),
            description: kind.description().to_string(),
        }
    }
}

// Action types for command palette and picker actions
// Using adjacently tagged serialization for frontend compatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export, export_to = "bindings.ts")]
pub enum ActionType {
    /// Transform the text passed in `params.text`
    TransformText(TransformPayload),
    /// Operate on the clipboard history
    ClipboardAction(ClipboardPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TransformPayload {
    pub transformation: TransformationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ClipboardPayload {
    pub action: ClipboardAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub enum ClipboardAction {
    ClearHistory,
    /// Remove the entry named by `params.item_id`
    DeleteEntry,
    /// Transform the entry named by `params.item_id` and record the result
    TransformEntry(TransformationKind),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub icon: Option<String>,
    pub action_type: Option<ActionType>,
    pub widget_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<ContextCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    #[ts(type = "any")]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionResponse {
    pub result: String,
    #[ts(type = "any")]
    pub metadata: Option<serde_json::Value>,
}

/// Type of clipboard content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings.ts")]
pub enum ClipboardItemType {
    Text,
    Html,
    Rtf,
    Image,
}

/// A single clipboard history item
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ClipboardHistoryItem {
    pub id: String,
    pub item_type: ClipboardItemType,
    pub content: String, // For images, a file path
    pub preview: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
    pub source_app: Option<String>,
}

impl ClipboardHistoryItem {
    pub fn new_text(content: String, source_app: Option<String>) -> Self {
        let preview = truncate_preview(&content);
        Self::new(ClipboardItemType::Text, content, preview, source_app)
    }

    pub fn new_html(content: String, source_app: Option<String>) -> Self {
        let preview = truncate_preview(&strip_html_tags(&content));
        Self::new(ClipboardItemType::Html, content, preview, source_app)
    }

    pub fn new_image(path: String, source_app: Option<String>) -> Self {
        Self::new(ClipboardItemType::Image, path, "[Image]".to_string(), source_app)
    }

    fn new(
        item_type: ClipboardItemType,
        content: String,
        preview: String,
        source_app: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            item_type,
            content,
            preview,
            timestamp: Utc::now(),
            source_app,
        }
    }
}

/// Cut to `PREVIEW_LENGTH` graphemes so multi-byte text never splits
fn truncate_preview(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(PREVIEW_LENGTH).collect();
    if graphemes.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn strip_html_tags(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result.trim().to_string()
}
