//! Settings command module
//!
//! Handles application settings persistence.

use crate::core::clipboard::ClipboardHistory;
use crate::shared::emit::EventEmitter;
use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;
use std::path::PathBuf;
use tracing::info;

/// Get current application settings
pub async fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load().await
}

/// Save application settings and notify listeners
pub async fn save_settings(settings: &AppSettings, emitter: &dyn EventEmitter) -> AppResult<()> {
    settings.save(emitter).await
}

pub fn get_settings_path() -> AppResult<PathBuf> {
    AppSettings::get_settings_path()
}

/// Push runtime-relevant settings into live state
pub fn apply_settings(settings: &AppSettings, history: &ClipboardHistory) -> AppResult<()> {
    history.set_capacity(settings.preferences.history_size)?;
    info!("[Settings] History capacity set to {}", settings.preferences.history_size);
    Ok(())
}
