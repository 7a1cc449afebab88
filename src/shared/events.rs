use serde::{Serialize, Deserialize};
use ts_rs::TS;
use super::types::ClipboardHistoryItem;
use super::settings::AppSettings;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "events.ts")]
pub enum AppEvent {
    #[serde(rename = "clipboard://updated")]
    ClipboardUpdated(ClipboardHistoryItem),

    #[serde(rename = "clipboard://cleared")]
    ClipboardCleared,

    #[serde(rename = "settings://updated")]
    SettingsUpdated(AppSettings),
}

impl AppEvent {
    /// Channel name the host UI listens on
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::ClipboardUpdated(_) => "clipboard://updated",
            AppEvent::ClipboardCleared => "clipboard://cleared",
            AppEvent::SettingsUpdated(_) => "settings://updated",
        }
    }
}
