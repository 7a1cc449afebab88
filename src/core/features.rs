//! Feature plugin system with enum dispatch
//!
//! Every feature contributes palette commands, context boosts and action
//! handlers. `AppFeature` lists them statically so dispatch needs no
//! trait objects.

use crate::core::clipboard::ClipboardHistory;
use crate::core::context::category::{get_action_category, get_widget_category};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use std::collections::HashMap;
use std::sync::OnceLock;
use enum_dispatch::enum_dispatch;
use async_trait::async_trait;
use tracing::debug;

pub mod clipboard;
pub mod text_transform;

/// State an action may need. Built by the host once and passed per call.
#[derive(Clone, Default)]
pub struct FeatureContext {
    pub history: ClipboardHistory,
}

impl FeatureContext {
    pub fn new(history: ClipboardHistory) -> Self {
        Self { history }
    }
}

/// Sync methods trait for enum_dispatch
#[enum_dispatch]
pub trait FeatureSync: Send + Sync {
    /// Unique identifier for this feature
    fn id(&self) -> &str;

    /// Commands that open the feature's window
    fn widget_commands(&self) -> Vec<CommandItem>;

    /// Commands that act immediately on the captured text or history
    fn action_commands(&self) -> Vec<CommandItem>;

    /// Map of command ID to boost score for the captured text.
    /// Higher scores move commands up the palette.
    fn get_context_boost(&self, captured_text: &str) -> HashMap<String, f64>;
}

/// Async methods trait (separate from enum_dispatch)
#[async_trait]
pub trait FeatureAsync: Send + Sync {
    /// Execute an action for this feature.
    ///
    /// Returns `AppError::Unsupported` for actions owned by another feature.
    async fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
        ctx: &FeatureContext,
    ) -> AppResult<ExecuteActionResponse>;
}

#[enum_dispatch(FeatureSync)]
pub enum AppFeature {
    TextTransform(text_transform::TextTransformFeature),
    Clipboard(clipboard::ClipboardFeature),
}

impl AppFeature {
    pub fn all() -> Vec<Self> {
        vec![
            AppFeature::TextTransform(text_transform::TextTransformFeature),
            AppFeature::Clipboard(clipboard::ClipboardFeature),
        ]
    }
}

static BASE_COMMAND_ITEMS: OnceLock<Vec<CommandItem>> = OnceLock::new();

/// Command items with categories assigned, built once per process
fn get_base_command_items() -> &'static Vec<CommandItem> {
    BASE_COMMAND_ITEMS.get_or_init(|| {
        let mut items = vec![];

        for feature in AppFeature::all() {
            let mut widget_cmds = feature.widget_commands();
            for cmd in &mut widget_cmds {
                if let Some(widget_type) = &cmd.widget_type {
                    cmd.category = get_widget_category(widget_type);
                }
            }
            items.extend(widget_cmds);

            let mut action_cmds = feature.action_commands();
            for cmd in &mut action_cmds {
                if let Some(action_type) = &cmd.action_type {
                    cmd.category = get_action_category(action_type);
                }
            }
            items.extend(action_cmds);
        }

        debug!("[Features] Cached {} commands", items.len());
        items
    })
}

/// All command items from all features
pub fn get_all_command_items() -> Vec<CommandItem> {
    get_base_command_items().clone()
}

/// Context boost from all features
pub fn get_context_boost(captured_text: &str) -> HashMap<String, f64> {
    let mut boost_map = HashMap::new();

    for feature in AppFeature::all() {
        boost_map.extend(feature.get_context_boost(captured_text));
    }

    boost_map
}

/// Execute an action with the first feature that claims it
pub async fn execute_feature_action(
    request: &ExecuteActionRequest,
    ctx: &FeatureContext,
) -> AppResult<ExecuteActionResponse> {
    for feature in AppFeature::all() {
        // enum_dispatch doesn't cover async methods
        let result = match &feature {
            AppFeature::TextTransform(f) => f.execute_action(&request.action_type, &request.params, ctx).await,
            AppFeature::Clipboard(f) => f.execute_action(&request.action_type, &request.params, ctx).await,
        };
        match result {
            Err(AppError::Unsupported) => continue,
            other => return other,
        }
    }

    Err(AppError::Feature("Unknown action type".to_string()))
}

/// Read a required string parameter
pub(crate) fn required_str<'a>(params: &'a serde_json::Value, key: &str) -> AppResult<&'a str> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::Validation(format!("Missing '{}' parameter", key)))
}
