//! The storage collaborator boundary.
//!
//! The engine never talks to persistence directly: a `StorageObserver`
//! subscribes to notifications and hands each snapshot to a `Storage`
//! backend. Saves are best-effort and fire-and-forget; a failure surfaces
//! as a warning and never rolls back or blocks the in-memory state.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::engine::{Notification, Observer};
use crate::error::DayPlanResult;
use crate::state::CalendarState;

/// Persistence backend contract. Implemented externally (a JSON file, a
/// network service); the engine only relies on this interface.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the persisted state. `Ok(None)` means nothing persisted yet.
    async fn open(&self) -> DayPlanResult<Option<CalendarState>>;

    /// Persist a snapshot of the state.
    async fn save(&self, state: &CalendarState) -> DayPlanResult<()>;
}

/// Engine observer that persists every snapshot it receives.
///
/// Each notification spawns an independent save, so saves issued later may
/// complete earlier. That is tolerated: every save carries a fully
/// self-consistent snapshot, and the persisted file is always valid.
/// Callers needing strict ordering must serialize saves themselves.
pub struct StorageObserver {
    backend: Arc<dyn Storage>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl StorageObserver {
    pub fn new(backend: Arc<dyn Storage>) -> StorageObserver {
        StorageObserver {
            backend,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Wait for every save issued so far to finish. Short-lived frontends
    /// call this before exiting so fire-and-forget saves actually land.
    pub async fn flush(&self) {
        let handles = std::mem::take(&mut *self.pending.lock());
        for handle in handles {
            let _ = handle.await;
        }
    }
}

impl Observer for StorageObserver {
    fn on_update(&self, notification: &Notification) {
        let backend = Arc::clone(&self.backend);
        let state = notification.state.clone();
        let handle = tokio::spawn(async move {
            if let Err(error) = backend.save(&state).await {
                tracing::warn!("failed to persist calendar state: {error}");
            }
        });
        self.pending.lock().push(handle);
    }
}
