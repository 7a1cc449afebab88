use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use super::filter::is_sensitive;
use crate::core::transform::{self, TransformationKind};
use crate::shared::emit::{emit_event, EventEmitter, LogEmitter};
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::settings::DEFAULT_HISTORY_SIZE;
use crate::shared::types::{ClipboardHistoryItem, ClipboardItemType};

/// Result of offering an item to the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Same content and type as the newest entry
    Duplicate,
    /// Consumed by the skip-next flag
    Skipped,
    /// Rejected by the sensitive-content filter
    Sensitive,
    /// The storage backend refused the write
    Failed,
}

/// Storage backend for clipboard history, newest item first
trait Storage: Send + Sync {
    /// Store `item` as the newest entry. Returns `false` without storing
    /// when the newest entry has the same content and type; the check and
    /// the insert are atomic.
    fn save_item(&self, item: &ClipboardHistoryItem) -> AppResult<bool>;
    fn load_items(&self, limit: usize) -> AppResult<Vec<ClipboardHistoryItem>>;
    fn remove_item(&self, id: &str) -> AppResult<bool>;
    fn clear_all(&self) -> AppResult<()>;
    fn get_item_by_id(&self, id: &str) -> AppResult<Option<ClipboardHistoryItem>>;
    fn set_capacity(&self, capacity: usize) -> AppResult<()>;
}

/// Bounded in-memory storage
struct InMemoryStorage {
    items: Mutex<Vec<ClipboardHistoryItem>>,
    capacity: Mutex<usize>,
}

/// Lock a mutex, recovering the data if a previous holder panicked
fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, name: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("[ClipboardHistory] {} mutex poisoned, recovering...", name);
        poisoned.into_inner()
    })
}

impl InMemoryStorage {
    fn new(capacity: usize) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            capacity: Mutex::new(capacity.max(1)),
        }
    }

    fn items(&self) -> MutexGuard<'_, Vec<ClipboardHistoryItem>> {
        lock_or_recover(&self.items, "Items")
    }

    fn capacity(&self) -> usize {
        *lock_or_recover(&self.capacity, "Capacity")
    }
}

impl Storage for InMemoryStorage {
    fn save_item(&self, item: &ClipboardHistoryItem) -> AppResult<bool> {
        let capacity = self.capacity();
        let mut items = self.items();
        if let Some(newest) = items.first() {
            if newest.content == item.content && newest.item_type == item.item_type {
                return Ok(false);
            }
        }
        items.insert(0, item.clone());
        items.truncate(capacity);
        Ok(true)
    }

    fn load_items(&self, limit: usize) -> AppResult<Vec<ClipboardHistoryItem>> {
        Ok(self.items().iter().take(limit).cloned().collect())
    }

    fn remove_item(&self, id: &str) -> AppResult<bool> {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }

    fn clear_all(&self) -> AppResult<()> {
        self.items().clear();
        Ok(())
    }

    fn get_item_by_id(&self, id: &str) -> AppResult<Option<ClipboardHistoryItem>> {
        Ok(self.items().iter().find(|item| item.id == id).cloned())
    }

    fn set_capacity(&self, capacity: usize) -> AppResult<()> {
        let capacity = capacity.max(1);
        *lock_or_recover(&self.capacity, "Capacity") = capacity;
        self.items().truncate(capacity);
        Ok(())
    }
}

/// Clipboard history manager
///
/// Cloning is cheap and every clone shares the same store, flag and emitter.
#[derive(Clone)]
pub struct ClipboardHistory {
    storage: Arc<dyn Storage>,
    skip_next_add: Arc<AtomicBool>,
    emitter: Arc<dyn EventEmitter>,
}

impl ClipboardHistory {
    pub fn new(capacity: usize) -> Self {
        Self::with_emitter(capacity, Arc::new(LogEmitter))
    }

    pub fn with_emitter(capacity: usize, emitter: Arc<dyn EventEmitter>) -> Self {
        Self {
            storage: Arc::new(InMemoryStorage::new(capacity)),
            skip_next_add: Arc::new(AtomicBool::new(false)),
            emitter,
        }
    }

    /// Offer a captured item to the history.
    ///
    /// Honours the skip-next flag, then the duplicate and sensitivity checks.
    pub fn add_item(&self, item: ClipboardHistoryItem) -> AddOutcome {
        if self.skip_next_add.swap(false, Ordering::SeqCst) {
            debug!("[ClipboardHistory] Skipping add due to skip_next_add flag");
            return AddOutcome::Skipped;
        }
        self.record(item)
    }

    fn record(&self, item: ClipboardHistoryItem) -> AddOutcome {
        if is_sensitive(&item.content, item.source_app.as_deref()) {
            return AddOutcome::Sensitive;
        }

        match self.storage.save_item(&item) {
            Ok(true) => {}
            Ok(false) => {
                debug!("[ClipboardHistory] Skipping duplicate item");
                return AddOutcome::Duplicate;
            }
            Err(e) => {
                warn!("[ClipboardHistory] Failed to save item: {}", e);
                return AddOutcome::Failed;
            }
        }

        info!("[ClipboardHistory] Added item: {}", item.id);
        emit_event(self.emitter.as_ref(), AppEvent::ClipboardUpdated(item));
        AddOutcome::Added
    }

    fn newest(&self) -> Option<ClipboardHistoryItem> {
        self.storage
            .load_items(1)
            .ok()
            .and_then(|items| items.into_iter().next())
    }

    /// All items, newest first
    pub fn get_items(&self) -> Vec<ClipboardHistoryItem> {
        self.storage.load_items(usize::MAX).unwrap_or_else(|e| {
            warn!("[ClipboardHistory] Failed to load items: {}", e);
            Vec::new()
        })
    }

    /// Get a specific item by index (0 = most recent)
    pub fn get_item(&self, index: usize) -> Option<ClipboardHistoryItem> {
        self.get_items().into_iter().nth(index)
    }

    pub fn get_item_by_id(&self, id: &str) -> Option<ClipboardHistoryItem> {
        self.storage.get_item_by_id(id).unwrap_or_else(|e| {
            warn!("[ClipboardHistory] Failed to get item by ID: {}", e);
            None
        })
    }

    pub fn remove_item(&self, id: &str) -> AppResult<()> {
        if self.storage.remove_item(id)? {
            info!("[ClipboardHistory] Removed item: {}", id);
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Clipboard item {}", id)))
        }
    }

    pub fn clear(&self) {
        match self.storage.clear_all() {
            Ok(()) => {
                info!("[ClipboardHistory] Cleared all items");
                emit_event(self.emitter.as_ref(), AppEvent::ClipboardCleared);
            }
            Err(e) => warn!("[ClipboardHistory] Failed to clear history: {}", e),
        }
    }

    pub fn count(&self) -> usize {
        self.get_items().len()
    }

    /// Shrink or grow the history; excess old items are dropped immediately
    pub fn set_capacity(&self, capacity: usize) -> AppResult<()> {
        self.storage.set_capacity(capacity)
    }

    /// Set the skip_next_add flag (used when the app itself writes the
    /// pasteboard, so the write is not captured again)
    pub fn set_skip_next_add(&self, skip: bool) {
        self.skip_next_add.store(skip, Ordering::SeqCst);
        debug!("[ClipboardHistory] Set skip_next_add to {}", skip);
    }

    /// Apply `kind` to a stored text entry and record the result as the
    /// newest entry.
    ///
    /// When the result equals the newest entry, that entry is returned
    /// instead of a new one.
    pub fn transform_item(&self, id: &str, kind: TransformationKind) -> AppResult<ClipboardHistoryItem> {
        let source = self
            .get_item_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Clipboard item {}", id)))?;

        if source.item_type != ClipboardItemType::Text {
            return Err(AppError::Validation(format!(
                "Only plain text entries can be transformed, got {:?}",
                source.item_type
            )));
        }

        let result = transform::apply(kind, &source.content);
        let item = ClipboardHistoryItem::new_text(result, source.source_app.clone());

        match self.record(item.clone()) {
            AddOutcome::Added => {
                info!("[ClipboardHistory] Applied {} to {}", kind.id(), id);
                Ok(item)
            }
            AddOutcome::Duplicate => self
                .newest()
                .ok_or_else(|| AppError::Clipboard("History changed during transform".to_string())),
            AddOutcome::Sensitive => Err(AppError::Clipboard(
                "Transformed content was rejected by the sensitive-content filter".to_string(),
            )),
            AddOutcome::Skipped | AddOutcome::Failed => {
                Err(AppError::Clipboard("Failed to store transformed item".to_string()))
            }
        }
    }
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::emit::RecordingEmitter;

    fn text(content: &str) -> ClipboardHistoryItem {
        ClipboardHistoryItem::new_text(content.to_string(), None)
    }

    #[test]
    fn test_add_and_get_items() {
        let history = ClipboardHistory::default();

        assert_eq!(history.add_item(text("First item")), AddOutcome::Added);
        assert_eq!(history.add_item(text("Second item")), AddOutcome::Added);

        let items = history.get_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].content, "Second item"); // Most recent first
        assert_eq!(items[1].content, "First item");
        assert_eq!(history.get_item(1).unwrap().content, "First item");
    }

    #[test]
    fn test_max_history_size() {
        let history = ClipboardHistory::new(5);

        for i in 0..10 {
            history.add_item(text(&format!("Item {}", i)));
        }

        let items = history.get_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].content, "Item 9");
    }

    #[test]
    fn test_set_capacity_truncates() {
        let history = ClipboardHistory::new(10);
        for i in 0..6 {
            history.add_item(text(&format!("Item {}", i)));
        }
        history.set_capacity(3).unwrap();
        assert_eq!(history.count(), 3);
        assert_eq!(history.get_item(0).unwrap().content, "Item 5");
    }

    #[test]
    fn test_skip_duplicate() {
        let history = ClipboardHistory::default();

        history.add_item(text("Same content"));
        assert_eq!(history.add_item(text("Same content")), AddOutcome::Duplicate);
        assert_eq!(history.count(), 1);
    }

    #[test]
    fn test_skip_next_add() {
        let history = ClipboardHistory::default();
        history.set_skip_next_add(true);

        assert_eq!(history.add_item(text("Should be skipped")), AddOutcome::Skipped);
        assert_eq!(history.count(), 0);

        // flag is consumed
        assert_eq!(history.add_item(text("Kept")), AddOutcome::Added);
    }

    #[test]
    fn test_sensitive_content_rejected() {
        let history = ClipboardHistory::default();
        let secret = ClipboardHistoryItem::new_text("hunter2".to_string(), Some("1Password".to_string()));
        assert_eq!(history.add_item(secret), AddOutcome::Sensitive);
        assert_eq!(history.count(), 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let emitter = RecordingEmitter::new();
        let history = ClipboardHistory::with_emitter(10, Arc::new(emitter.clone()));

        let first = text("Item 1");
        let first_id = first.id.clone();
        history.add_item(first);
        history.add_item(text("Item 2"));

        history.remove_item(&first_id).unwrap();
        assert_eq!(history.count(), 1);
        assert!(matches!(history.remove_item(&first_id), Err(AppError::NotFound(_))));

        history.clear();
        assert_eq!(history.count(), 0);

        let events = emitter.take();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], AppEvent::ClipboardCleared));
    }

    #[test]
    fn test_transform_item_records_new_entry() {
        let history = ClipboardHistory::default();
        let source = text("HelloWorld");
        let source_id = source.id.clone();
        history.add_item(source);

        let result = history.transform_item(&source_id, TransformationKind::SnakeCase).unwrap();
        assert_eq!(result.content, "hello_world");
        assert_ne!(result.id, source_id);

        let items = history.get_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, result.id);
        assert_eq!(items[1].content, "HelloWorld");
    }

    #[test]
    fn test_transform_item_ignores_skip_flag() {
        let history = ClipboardHistory::default();
        let source = text("abc");
        let source_id = source.id.clone();
        history.add_item(source);
        history.set_skip_next_add(true);

        let result = history.transform_item(&source_id, TransformationKind::UppercaseCase).unwrap();
        assert_eq!(history.get_item(0).unwrap().id, result.id);
    }

    #[test]
    fn test_transform_item_unchanged_returns_newest() {
        let history = ClipboardHistory::default();
        let source = text("already_snake");
        let source_id = source.id.clone();
        history.add_item(source);

        let result = history.transform_item(&source_id, TransformationKind::SnakeCase).unwrap();
        assert_eq!(result.id, source_id);
        assert_eq!(history.count(), 1);
    }

    #[test]
    fn test_transform_item_errors() {
        let history = ClipboardHistory::default();
        assert!(matches!(
            history.transform_item("missing", TransformationKind::UppercaseCase),
            Err(AppError::NotFound(_))
        ));

        let image = ClipboardHistoryItem::new_image("/tmp/shot.png".to_string(), None);
        let image_id = image.id.clone();
        history.add_item(image);
        assert!(matches!(
            history.transform_item(&image_id, TransformationKind::UppercaseCase),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_clones_share_store() {
        let history = ClipboardHistory::default();
        let other = history.clone();
        history.add_item(text("shared"));
        assert_eq!(other.count(), 1);
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn save_item(&self, _item: &ClipboardHistoryItem) -> AppResult<bool> {
            Err(AppError::Clipboard("disk full".to_string()))
        }
        fn load_items(&self, _limit: usize) -> AppResult<Vec<ClipboardHistoryItem>> {
            Ok(Vec::new())
        }
        fn remove_item(&self, _id: &str) -> AppResult<bool> {
            Ok(false)
        }
        fn clear_all(&self) -> AppResult<()> {
            Ok(())
        }
        fn get_item_by_id(&self, _id: &str) -> AppResult<Option<ClipboardHistoryItem>> {
            Ok(None)
        }
        fn set_capacity(&self, _capacity: usize) -> AppResult<()> {
            Ok(())
        }
    }

    fn history_over(storage: Arc<dyn Storage>) -> ClipboardHistory {
        ClipboardHistory {
            storage,
            skip_next_add: Arc::new(AtomicBool::new(false)),
            emitter: Arc::new(LogEmitter),
        }
    }

    #[test]
    fn test_storage_failure_is_distinct_from_skip() {
        let history = history_over(Arc::new(FailingStorage));
        assert_eq!(history.add_item(text("lost")), AddOutcome::Failed);
    }

    #[test]
    fn test_poisoned_lock_keeps_items() {
        let storage = Arc::new(InMemoryStorage::new(10));
        let history = history_over(storage.clone());
        history.add_item(text("before panic"));

        let poisoner = storage.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.items.lock().unwrap();
            panic!("writer crashed while holding the lock");
        })
        .join();
        assert!(storage.items.is_poisoned());

        assert_eq!(history.count(), 1);
        assert_eq!(history.get_item(0).unwrap().content, "before panic");
        assert_eq!(history.add_item(text("after panic")), AddOutcome::Added);
        assert_eq!(history.count(), 2);
    }

    #[test]
    fn test_concurrent_duplicates_stored_once() {
        let history = ClipboardHistory::new(100);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let history = history.clone();
                std::thread::spawn(move || history.add_item(text("same from every thread")))
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outcomes.iter().filter(|o| **o == AddOutcome::Added).count(), 1);
        assert_eq!(history.count(), 1);
    }
}
