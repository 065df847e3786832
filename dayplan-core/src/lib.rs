//! Core types for the dayplan ecosystem.
//!
//! This crate provides the calendar state engine used by dayplan frontends:
//! - `LocalDate` and holiday/recurrence helpers for timezone-naive calendar days
//! - `CalendarState` and its mutation operations
//! - `CalendarEngine`, which turns user intents into state changes and fans
//!   out snapshot notifications to storage and presentation observers

pub mod activity;
pub mod engine;
pub mod error;
pub mod holiday;
pub mod local_date;
pub mod recurrence;
pub mod state;
pub mod storage;

// Re-export the main types at crate root for convenience
pub use activity::{Activity, ActivityDraft, ActivityId, ActivityPatch, Color, Icon, SeriesId};
pub use engine::{CalendarEngine, EventType, Notification, Observer};
pub use error::{DayPlanError, DayPlanResult};
pub use holiday::{holidays_on, Holiday};
pub use local_date::{DayOfWeekExt, LocalDate};
pub use recurrence::{Occurrences, RepeatInterval};
pub use state::{CalendarEntry, CalendarState};
pub use storage::{Storage, StorageObserver};
