//! JSON-file storage backend.

use std::path::PathBuf;

use async_trait::async_trait;
use dayplan_core::{CalendarState, DayPlanError, DayPlanResult, Storage};

/// Persists the calendar state as pretty-printed JSON at a fixed path.
///
/// Writes go through a `.tmp` file plus rename, so a crashed save never
/// leaves a half-written state behind.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> JsonFileStorage {
        JsonFileStorage { path }
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn open(&self) -> DayPlanResult<Option<CalendarState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&content)?;
        Ok(Some(state))
    }

    async fn save(&self, state: &CalendarState) -> DayPlanResult<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| DayPlanError::Storage(format!("{} has no parent", self.path.display())))?;
        std::fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(state)?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
