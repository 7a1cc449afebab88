use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::info;

use crate::core::transform::TransformationKind;
use crate::shared::emit::{emit_event, EventEmitter};
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;

/// Default number of entries kept in the clipboard history
pub const DEFAULT_HISTORY_SIZE: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct AppSettings {
    pub hotkeys: HotkeySettings,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct HotkeySettings {
    pub command_palette: String,
    pub transform_picker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct UserPreferences {
    pub history_size: usize,
    /// Applied by the "transform last copy" hotkey
    pub default_transformation: Option<TransformationKind>,
    /// Left out of the picker and the command index
    pub hidden_transformations: Vec<TransformationKind>,
    pub theme: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            command_palette: "Command+Shift+V".to_string(),
            transform_picker: "Command+Shift+T".to_string(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            default_transformation: None,
            hidden_transformations: Vec::new(),
            theme: "system".to_string(),
        }
    }
}

impl UserPreferences {
    pub fn is_hidden(&self, kind: TransformationKind) -> bool {
        self.hidden_transformations.contains(&kind)
    }

    /// Transformations shown in the picker, in display order
    pub fn visible_transformations(&self) -> Vec<TransformationKind> {
        TransformationKind::ALL
            .into_iter()
            .filter(|kind| !self.is_hidden(*kind))
            .collect()
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "clipshelf", "clipshelf")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config dir, writing defaults on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            info!("[Settings] Wrote default settings to {}", path.display());
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.normalize();
        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Save settings to disk and emit update event
    pub async fn save(&self, emitter: &dyn EventEmitter) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path).await?;

        emit_event(emitter, AppEvent::SettingsUpdated(self.clone()));

        Ok(())
    }

    /// Clamp values a hand-edited file may have broken
    fn normalize(&mut self) {
        if self.preferences.history_size == 0 {
            self.preferences.history_size = DEFAULT_HISTORY_SIZE;
        }
        self.preferences.hidden_transformations.sort();
        self.preferences.hidden_transformations.dedup();
    }
}
