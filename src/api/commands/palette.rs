//! Command palette module
//!
//! Command item retrieval, action execution and usage tracking.
//! Feature-specific logic is delegated to the features module.

use crate::core::context::{self, UsageMetrics};
use crate::core::context::ranking::UsageSnapshot;
use crate::core::features::{self, FeatureContext};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use tracing::{debug, info, warn};

/// Get all visible command items, ranked by usage and captured text
pub fn get_command_items(
    metrics: &UsageMetrics,
    settings: &AppSettings,
    captured_text: Option<&str>,
) -> Vec<CommandItem> {
    let items: Vec<CommandItem> = features::get_all_command_items()
        .into_iter()
        .filter(|cmd| !is_hidden(cmd, settings))
        .collect();

    let context_boost = captured_text
        .filter(|text| !text.trim().is_empty())
        .map(features::get_context_boost);

    context::rank_commands(items, |cmd| cmd.id.clone(), metrics, context_boost.as_ref())
}

fn is_hidden(cmd: &CommandItem, settings: &AppSettings) -> bool {
    match &cmd.action_type {
        Some(ActionType::TransformText(payload)) => settings.preferences.is_hidden(payload.transformation),
        _ => false,
    }
}

/// Execute an action and record its usage on success
pub async fn execute_action(
    request: ExecuteActionRequest,
    ctx: &FeatureContext,
    metrics: &UsageMetrics,
) -> AppResult<ExecuteActionResponse> {
    let response = features::execute_feature_action(&request, ctx).await?;

    match command_id_for(&request.action_type) {
        Some(id) => metrics.record_usage(&id),
        None => debug!("[Palette] No command for {:?}, usage not recorded", request.action_type),
    }

    Ok(response)
}

/// Id of the palette command that issues `action`, if any
fn command_id_for(action: &ActionType) -> Option<String> {
    features::get_all_command_items()
        .into_iter()
        .find(|cmd| cmd.action_type.as_ref() == Some(action))
        .map(|cmd| cmd.id)
}

/// Record command usage for ranking
pub fn record_command_usage(metrics: &UsageMetrics, command_id: &str) -> AppResult<()> {
    if command_id.trim().is_empty() {
        warn!("[Palette] Ignoring usage for empty command id");
        return Err(AppError::Validation("Command id must not be empty".to_string()));
    }
    metrics.record_usage(command_id);
    Ok(())
}

/// Usage per command, most used first
pub fn get_usage_stats(metrics: &UsageMetrics) -> Vec<UsageSnapshot> {
    metrics.snapshot()
}

/// Forget all recorded usage; ranking falls back to declaration order
pub fn reset_usage(metrics: &UsageMetrics) {
    metrics.clear();
    info!("[Palette] Usage statistics reset");
}
