//! Clipboard history commands

use crate::core::clipboard::ClipboardHistory;
use crate::core::transform::TransformationKind;
use crate::shared::error::AppResult;
use crate::shared::types::ClipboardHistoryItem;

/// All history items, newest first
pub fn get_clipboard_history(history: &ClipboardHistory) -> Vec<ClipboardHistoryItem> {
    history.get_items()
}

pub fn clear_clipboard_history(history: &ClipboardHistory) {
    history.clear();
}

pub fn delete_clipboard_item(history: &ClipboardHistory, item_id: &str) -> AppResult<()> {
    history.remove_item(item_id)
}

/// Transform a stored entry; the result becomes the newest entry
pub fn transform_clipboard_item(
    history: &ClipboardHistory,
    item_id: &str,
    transformation: TransformationKind,
) -> AppResult<ClipboardHistoryItem> {
    history.transform_item(item_id, transformation)
}
