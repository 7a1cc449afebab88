use std::sync::{Arc, Mutex};
use tracing::debug;

use super::events::AppEvent;

/// Delivery seam for application events.
///
/// The menu-bar host implements this to forward events to its windows;
/// the library only ever talks to the trait.
pub trait EventEmitter: Send + Sync {
    fn emit(&self, event: &AppEvent) -> Result<(), String>;
}

/// Emit an application event, logging instead of failing on delivery errors
pub fn emit_event(emitter: &dyn EventEmitter, event: AppEvent) {
    if let Err(e) = emitter.emit(&event) {
        tracing::warn!("[Emit] Failed to emit {}: {}", event.name(), e);
    }
}

/// Emitter used when no host is attached: events only reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmitter;

impl EventEmitter for LogEmitter {
    fn emit(&self, event: &AppEvent) -> Result<(), String> {
        debug!("[Emit] {}", event.name());
        Ok(())
    }
}

/// Collects emitted events in memory. Handy for hosts that poll, and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<AppEvent>>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<AppEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}

impl EventEmitter for RecordingEmitter {
    fn emit(&self, event: &AppEvent) -> Result<(), String> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
        Ok(())
    }
}
