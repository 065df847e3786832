//! Wires the engine to its collaborators for one CLI invocation.

use std::sync::Arc;

use anyhow::{Context, Result};
use dayplan_core::{CalendarEngine, CalendarState, EventType, Storage, StorageObserver};

use crate::config::DayPlanConfig;
use crate::render::TerminalView;
use crate::storage::JsonFileStorage;

/// A loaded engine plus the storage observer that persists its changes.
///
/// `open` performs the one-time initial load: restore (or create) the
/// state, register the storage and terminal observers, and emit `Load`.
/// `close` waits for the fire-and-forget saves to land before the process
/// exits.
pub struct Session {
    pub engine: CalendarEngine,
    store: Arc<StorageObserver>,
}

impl Session {
    pub async fn open(render_on: &[EventType]) -> Result<Session> {
        let config = DayPlanConfig::load()?;
        let data_file = config.data_file()?;

        let backend = Arc::new(JsonFileStorage::new(data_file.clone()));
        let restored = backend
            .open()
            .await
            .with_context(|| format!("Could not load {}", data_file.display()))?;
        let restored = Some(restored.unwrap_or_else(|| CalendarState::new(config.days_visible)));

        let store = Arc::new(StorageObserver::new(backend));
        let mut engine = CalendarEngine::new();
        engine.add_observer(store.clone());
        engine.add_observer(Arc::new(TerminalView::new(render_on)));
        engine.initial_load(restored);

        Ok(Session { engine, store })
    }

    /// Flush pending saves. Call once after the command's mutations.
    pub async fn close(self) {
        self.store.flush().await;
    }
}
