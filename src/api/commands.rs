//! Command modules, grouped by the surface they serve
//!
//! - `transform`: picker listing and one-shot text transformation
//! - `palette`: command items, action execution and usage tracking
//! - `clipboard`: history access
//! - `settings`: settings persistence

pub mod clipboard;
pub mod palette;
pub mod settings;
pub mod transform;

pub use clipboard::{clear_clipboard_history, delete_clipboard_item, get_clipboard_history, transform_clipboard_item};
pub use palette::{execute_action, get_command_items, get_usage_stats, record_command_usage, reset_usage};
pub use settings::{apply_settings, get_settings, get_settings_path, save_settings};
pub use transform::{get_transformations, transform_text};
