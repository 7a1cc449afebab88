//! Clipboard history feature
//!
//! Palette entries for browsing, clearing and rewriting the history.

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, ClipboardAction, ClipboardPayload, CommandItem, ExecuteActionResponse};
use super::{required_str, FeatureAsync, FeatureContext, FeatureSync};
use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ClipboardFeature;

impl FeatureSync for ClipboardFeature {
    fn id(&self) -> &str {
        "clipboard"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_clipboard".to_string(),
            label: "Clipboard History".to_string(),
            description: Some("View and manage clipboard history".to_string()),
            icon: Some("doc.on.clipboard".to_string()),
            action_type: None,
            widget_type: Some("clipboard".to_string()),
            category: None,
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        vec![
            CommandItem {
                id: "clear_clipboard_history".to_string(),
                label: "Clear Clipboard History".to_string(),
                description: Some("Remove every stored entry".to_string()),
                icon: Some("trash".to_string()),
                action_type: Some(ActionType::ClipboardAction(ClipboardPayload {
                    action: ClipboardAction::ClearHistory,
                })),
                widget_type: None,
                category: None,
            },
            CommandItem {
                id: "delete_clipboard_entry".to_string(),
                label: "Delete Clipboard Entry".to_string(),
                description: Some("Remove the selected entry".to_string()),
                icon: Some("minus.circle".to_string()),
                action_type: Some(ActionType::ClipboardAction(ClipboardPayload {
                    action: ClipboardAction::DeleteEntry,
                })),
                widget_type: None,
                category: None,
            },
        ]
    }

    fn get_context_boost(&self, _captured_text: &str) -> HashMap<String, f64> {
        HashMap::new()
    }
}

#[async_trait]
impl FeatureAsync for ClipboardFeature {
    async fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
        ctx: &FeatureContext,
    ) -> AppResult<ExecuteActionResponse> {
        let action = match action {
            ActionType::ClipboardAction(payload) => &payload.action,
            _ => return Err(AppError::Unsupported),
        };

        match action {
            ClipboardAction::ClearHistory => {
                let removed = ctx.history.count();
                ctx.history.clear();
                Ok(ExecuteActionResponse {
                    result: format!("Cleared {} items", removed),
                    metadata: Some(serde_json::json!({ "removed": removed })),
                })
            }
            ClipboardAction::DeleteEntry => {
                let id = required_str(params, "item_id")?;
                ctx.history.remove_item(id)?;
                Ok(ExecuteActionResponse {
                    result: id.to_string(),
                    metadata: None,
                })
            }
            ClipboardAction::TransformEntry(kind) => {
                let id = required_str(params, "item_id")?;
                let item = ctx.history.transform_item(id, *kind)?;
                info!("[ClipboardFeature] Transformed entry {} into {}", id, item.id);
                Ok(ExecuteActionResponse {
                    metadata: Some(serde_json::json!({
                        "item_id": item.id,
                        "transformation": kind,
                    })),
                    result: item.content,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::TransformationKind;
    use crate::shared::types::{ClipboardHistoryItem, TransformPayload};
    use serde_json::json;

    fn clipboard_action(action: ClipboardAction) -> ActionType {
        ActionType::ClipboardAction(ClipboardPayload { action })
    }

    fn seeded() -> FeatureContext {
        let ctx = FeatureContext::default();
        ctx.history
            .add_item(ClipboardHistoryItem::new_text("user_name".to_string(), None));
        ctx
    }

    #[tokio::test]
    async fn test_clear_history() {
        let ctx = seeded();
        let response = ClipboardFeature
            .execute_action(&clipboard_action(ClipboardAction::ClearHistory), &json!({}), &ctx)
            .await
            .unwrap();
        assert_eq!(response.result, "Cleared 1 items");
        assert_eq!(ctx.history.count(), 0);
    }

    #[tokio::test]
    async fn test_delete_entry() {
        let ctx = seeded();
        let id = ctx.history.get_items()[0].id.clone();

        ClipboardFeature
            .execute_action(&clipboard_action(ClipboardAction::DeleteEntry), &json!({ "item_id": id }), &ctx)
            .await
            .unwrap();
        assert_eq!(ctx.history.count(), 0);

        let err = ClipboardFeature
            .execute_action(&clipboard_action(ClipboardAction::DeleteEntry), &json!({ "item_id": id }), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_transform_entry() {
        let ctx = seeded();
        let id = ctx.history.get_items()[0].id.clone();
        let action = clipboard_action(ClipboardAction::TransformEntry(TransformationKind::CamelCase));

        let response = ClipboardFeature
            .execute_action(&action, &json!({ "item_id": id }), &ctx)
            .await
            .unwrap();
        assert_eq!(response.result, "userName");
        assert_eq!(ctx.history.count(), 2);
        assert_eq!(ctx.history.get_items()[0].content, "userName");
    }

    #[tokio::test]
    async fn test_missing_item_id() {
        let ctx = seeded();
        let err = ClipboardFeature
            .execute_action(&clipboard_action(ClipboardAction::DeleteEntry), &json!({}), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_ignores_transform_text() {
        let ctx = FeatureContext::default();
        let action = ActionType::TransformText(TransformPayload {
            transformation: TransformationKind::SnakeCase,
        });
        let err = ClipboardFeature
            .execute_action(&action, &json!({ "text": "x" }), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Unsupported);
    }
}
