//! The calendar engine: user intents in, snapshot notifications out.
//!
//! `CalendarEngine` is the single writer of the calendar state. Every
//! operation runs to completion synchronously: recurrence expansion, store
//! mutation, then notification fan-out. Observers receive an independent
//! snapshot per notification, so a presentation layer can diff two
//! snapshots without the engine mutating one underneath it.

use std::sync::Arc;

use crate::activity::{Activity, ActivityDraft, ActivityId, ActivityPatch, SeriesId};
use crate::error::{DayPlanError, DayPlanResult};
use crate::local_date::LocalDate;
use crate::recurrence::Occurrences;
use crate::state::CalendarState;

/// Semantic tag carried by each notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Load,
    DaysVisibleChanged,
    ActivityAdded,
    ActivityUpdated,
    ActivityRemoved,
}

/// A state snapshot plus the event that produced it. The snapshot is an
/// independent deep copy; observers may clone and retain it freely.
#[derive(Debug, Clone)]
pub struct Notification {
    pub state: CalendarState,
    pub event: EventType,
}

/// Receives change notifications from the engine. Implemented by storage
/// and presentation collaborators.
pub trait Observer: Send + Sync {
    fn on_update(&self, notification: &Notification);
}

/// Orchestrates the calendar state in response to user intents.
///
/// Starts uninitialized; `initial_load` transitions it to ready exactly
/// once. Every other operation requires the loaded state and returns
/// `DayPlanError::NotLoaded` otherwise. Invalid input (bad text length,
/// empty recurrence) leaves the state unchanged without notifying.
#[derive(Default)]
pub struct CalendarEngine {
    state: Option<CalendarState>,
    observers: Vec<Arc<dyn Observer>>,
}

impl CalendarEngine {
    pub fn new() -> CalendarEngine {
        CalendarEngine::default()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// The current state, if loaded. Read-only.
    pub fn state(&self) -> Option<&CalendarState> {
        self.state.as_ref()
    }

    /// Deserialize or create a fresh state, prune entries older than
    /// yesterday, and go ready. Emits `Load`. Calling again after the
    /// first load is ignored.
    pub fn initial_load(&mut self, restored: Option<CalendarState>) {
        if self.state.is_some() {
            tracing::debug!("ignoring repeated initial load");
            return;
        }
        let mut state = restored.unwrap_or_default();
        // Persisted data may carry a zero day count; re-clamp it.
        let days_visible = state.days_visible;
        state.set_days_visible(days_visible);
        // Nothing from before today needs displaying, so save the space.
        state.prune_before(LocalDate::today().prior());
        self.state = Some(state);
        tracing::debug!("calendar loaded");
        self.notify(EventType::Load);
    }

    /// Clamp and store the visible-day count. Emits `DaysVisibleChanged`.
    pub fn set_days_visible(&mut self, days_visible: i64) -> DayPlanResult<()> {
        let state = self.state.as_mut().ok_or(DayPlanError::NotLoaded)?;
        state.set_days_visible(days_visible.max(1) as u32);
        self.notify(EventType::DaysVisibleChanged);
        Ok(())
    }

    /// Expand the draft's repeat fields from the anchor date and insert one
    /// fresh activity per occurrence. Multiple occurrences share one fresh
    /// series id; a single occurrence gets none. Emits `ActivityAdded` once
    /// after all insertions. An empty expansion (end date before anchor) or
    /// an invalid draft is a silent no-op.
    pub fn add_activity(&mut self, anchor: LocalDate, draft: ActivityDraft) -> DayPlanResult<()> {
        let state = self.state.as_mut().ok_or(DayPlanError::NotLoaded)?;
        if let Err(reason) = draft.validate() {
            tracing::debug!("rejecting add: {reason}");
            return Ok(());
        }

        let dates: Vec<LocalDate> =
            Occurrences::new(anchor, draft.repeat, draft.repeat_until).collect();
        if dates.is_empty() {
            tracing::debug!("add expanded to no dates, leaving state unchanged");
            return Ok(());
        }

        let series = (dates.len() > 1).then(SeriesId::new);
        for date in &dates {
            state.upsert_activity(
                *date,
                Activity {
                    id: ActivityId::new(),
                    series: series.clone(),
                    text: draft.text.clone(),
                    color: draft.color,
                    icon: draft.icon,
                },
            );
        }
        tracing::debug!(occurrences = dates.len(), "added activity");
        self.notify(EventType::ActivityAdded);
        Ok(())
    }

    /// Update one occurrence in place, preserving its id and series
    /// membership. Emits `ActivityUpdated` when something changed; an
    /// unknown id or invalid patch is a silent no-op.
    pub fn update_activity(&mut self, id: &ActivityId, patch: ActivityPatch) -> DayPlanResult<()> {
        let state = self.state.as_mut().ok_or(DayPlanError::NotLoaded)?;
        if let Err(reason) = patch.validate() {
            tracing::debug!("rejecting update: {reason}");
            return Ok(());
        }
        if state.update_activity(id, &patch) {
            self.notify(EventType::ActivityUpdated);
        }
        Ok(())
    }

    /// Update every occurrence sharing the series. Emits `ActivityUpdated`
    /// when at least one member changed.
    pub fn update_series(&mut self, series: &SeriesId, patch: ActivityPatch) -> DayPlanResult<()> {
        let state = self.state.as_mut().ok_or(DayPlanError::NotLoaded)?;
        if let Err(reason) = patch.validate() {
            tracing::debug!("rejecting series update: {reason}");
            return Ok(());
        }
        let touched = state.update_series(series, &patch);
        if touched > 0 {
            tracing::debug!(touched, "updated series");
            self.notify(EventType::ActivityUpdated);
        }
        Ok(())
    }

    /// Remove one occurrence. Emits `ActivityRemoved` when something was
    /// removed; an unknown id is a silent no-op.
    pub fn remove_activity(&mut self, id: &ActivityId) -> DayPlanResult<()> {
        let state = self.state.as_mut().ok_or(DayPlanError::NotLoaded)?;
        if state.remove_activity(id) {
            self.notify(EventType::ActivityRemoved);
        }
        Ok(())
    }

    fn notify(&self, event: EventType) {
        let Some(state) = &self.state else {
            return;
        };
        let notification = Notification {
            state: state.clone(),
            event,
        };
        for observer in &self.observers {
            observer.on_update(&notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Color, Icon};
    use crate::recurrence::RepeatInterval;
    use parking_lot::Mutex;

    /// Records every notification it receives.
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Notification>>,
    }

    impl Observer for Recorder {
        fn on_update(&self, notification: &Notification) {
            self.seen.lock().push(notification.clone());
        }
    }

    fn date(s: &str) -> LocalDate {
        LocalDate::from_iso(s).unwrap()
    }

    fn draft(text: &str, repeat: RepeatInterval, until: Option<&str>) -> ActivityDraft {
        ActivityDraft {
            text: text.to_string(),
            color: Color::Yellow,
            icon: Icon::Star,
            repeat,
            repeat_until: until.map(date),
        }
    }

    fn loaded_engine() -> (CalendarEngine, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let mut engine = CalendarEngine::new();
        engine.add_observer(recorder.clone());
        engine.initial_load(None);
        (engine, recorder)
    }

    fn events(recorder: &Recorder) -> Vec<EventType> {
        recorder.seen.lock().iter().map(|n| n.event).collect()
    }

    #[test]
    fn test_operations_require_load() {
        let mut engine = CalendarEngine::new();
        assert!(matches!(
            engine.set_days_visible(3),
            Err(DayPlanError::NotLoaded)
        ));
        assert!(matches!(
            engine.remove_activity(&ActivityId::from("a")),
            Err(DayPlanError::NotLoaded)
        ));
    }

    #[test]
    fn test_load_emits_once_and_defaults() {
        let (engine, recorder) = loaded_engine();
        assert_eq!(events(&recorder), vec![EventType::Load]);
        assert_eq!(engine.state().unwrap().days_visible, 7);

        // second load is ignored
        let mut engine = engine;
        engine.initial_load(None);
        assert_eq!(events(&recorder), vec![EventType::Load]);
    }

    #[test]
    fn test_load_prunes_stale_entries() {
        let yesterday = LocalDate::today().prior();
        let mut stale = CalendarState::default();
        stale.upsert_activity(
            yesterday.prior(),
            Activity {
                id: ActivityId::from("old"),
                series: None,
                text: "stale".to_string(),
                color: Color::Transparent,
                icon: Icon::Empty,
            },
        );
        stale.upsert_activity(
            yesterday,
            Activity {
                id: ActivityId::from("edge"),
                series: None,
                text: "kept".to_string(),
                color: Color::Transparent,
                icon: Icon::Empty,
            },
        );

        let mut engine = CalendarEngine::new();
        engine.initial_load(Some(stale));

        let state = engine.state().unwrap();
        assert!(state.find_activity(&ActivityId::from("old")).is_none());
        assert!(state.find_activity(&ActivityId::from("edge")).is_some());
    }

    #[test]
    fn test_repeating_add_shares_one_series() {
        let (mut engine, recorder) = loaded_engine();
        engine
            .add_activity(
                date("2024-03-01"),
                draft("swim", RepeatInterval::Daily, Some("2024-03-03")),
            )
            .unwrap();

        // one notification for the whole expansion
        assert_eq!(events(&recorder), vec![EventType::Load, EventType::ActivityAdded]);

        let state = engine.state().unwrap();
        let activities: Vec<_> = state.activities().collect();
        assert_eq!(activities.len(), 3);

        let series = activities[0].series.clone().unwrap();
        assert!(activities.iter().all(|a| a.series.as_ref() == Some(&series)));

        let mut ids: Vec<_> = activities.iter().map(|a| a.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        for day in ["2024-03-01", "2024-03-02", "2024-03-03"] {
            assert_eq!(state.entry(date(day)).unwrap().activities.len(), 1);
        }
    }

    #[test]
    fn test_single_add_has_no_series() {
        let (mut engine, _) = loaded_engine();
        engine
            .add_activity(date("2024-03-01"), draft("swim", RepeatInterval::None, None))
            .unwrap();

        let state = engine.state().unwrap();
        assert_eq!(state.activities().count(), 1);
        assert_eq!(state.activities().next().unwrap().series, None);
    }

    #[test]
    fn test_end_before_anchor_is_silent_noop() {
        let (mut engine, recorder) = loaded_engine();
        engine
            .add_activity(
                date("2024-03-10"),
                draft("swim", RepeatInterval::Daily, Some("2024-03-01")),
            )
            .unwrap();

        assert_eq!(events(&recorder), vec![EventType::Load]);
        assert!(engine.state().unwrap().entries.is_empty());
    }

    #[test]
    fn test_invalid_text_is_silent_noop() {
        let (mut engine, recorder) = loaded_engine();
        engine
            .add_activity(
                date("2024-03-01"),
                draft(
                    "way too long to be a valid activity",
                    RepeatInterval::None,
                    None,
                ),
            )
            .unwrap();

        assert_eq!(events(&recorder), vec![EventType::Load]);
        assert!(engine.state().unwrap().entries.is_empty());
    }

    #[test]
    fn test_update_preserves_series_membership() {
        let (mut engine, _) = loaded_engine();
        engine
            .add_activity(
                date("2024-03-01"),
                draft("swim", RepeatInterval::Daily, Some("2024-03-02")),
            )
            .unwrap();

        let first_id = engine.state().unwrap().activities().next().unwrap().id.clone();
        engine
            .update_activity(
                &first_id,
                ActivityPatch {
                    text: "dive".to_string(),
                    color: Color::Pink,
                    icon: Icon::Star,
                },
            )
            .unwrap();

        let state = engine.state().unwrap();
        let updated = state.find_activity(&first_id).unwrap();
        assert_eq!(updated.text, "dive");
        assert!(updated.series.is_some());
    }

    #[test]
    fn test_update_series_recolors_members_only() {
        let (mut engine, _) = loaded_engine();
        engine
            .add_activity(
                date("2024-03-01"),
                draft("swim", RepeatInterval::Daily, Some("2024-03-02")),
            )
            .unwrap();
        engine
            .add_activity(date("2024-03-01"), draft("read", RepeatInterval::None, None))
            .unwrap();

        let series = engine
            .state()
            .unwrap()
            .activities()
            .find_map(|a| a.series.clone())
            .unwrap();
        engine
            .update_series(
                &series,
                ActivityPatch {
                    text: "swim".to_string(),
                    color: Color::Pink,
                    icon: Icon::Star,
                },
            )
            .unwrap();

        let state = engine.state().unwrap();
        for activity in state.activities() {
            if activity.series.as_ref() == Some(&series) {
                assert_eq!(activity.color, Color::Pink);
            } else {
                assert_ne!(activity.color, Color::Pink);
            }
        }
    }

    #[test]
    fn test_remove_unknown_id_emits_nothing() {
        let (mut engine, recorder) = loaded_engine();
        engine
            .add_activity(date("2024-03-01"), draft("swim", RepeatInterval::None, None))
            .unwrap();
        let before = serde_json::to_string(engine.state().unwrap()).unwrap();

        engine.remove_activity(&ActivityId::from("ghost")).unwrap();

        let after = serde_json::to_string(engine.state().unwrap()).unwrap();
        assert_eq!(before, after);
        assert_eq!(
            events(&recorder),
            vec![EventType::Load, EventType::ActivityAdded]
        );
    }

    #[test]
    fn test_days_visible_clamped_then_usable() {
        let (mut engine, recorder) = loaded_engine();
        engine.set_days_visible(0).unwrap();
        assert_eq!(engine.state().unwrap().days_visible, 1);
        engine.set_days_visible(-3).unwrap();
        assert_eq!(engine.state().unwrap().days_visible, 1);
        engine.set_days_visible(14).unwrap();
        assert_eq!(engine.state().unwrap().days_visible, 14);
        assert_eq!(
            events(&recorder),
            vec![
                EventType::Load,
                EventType::DaysVisibleChanged,
                EventType::DaysVisibleChanged,
                EventType::DaysVisibleChanged,
            ]
        );
    }

    #[test]
    fn test_snapshots_are_independent() {
        let (mut engine, recorder) = loaded_engine();
        engine
            .add_activity(date("2024-03-01"), draft("swim", RepeatInterval::None, None))
            .unwrap();
        engine
            .add_activity(date("2024-03-02"), draft("read", RepeatInterval::None, None))
            .unwrap();

        // earlier snapshots must not reflect later mutations
        let seen = recorder.seen.lock();
        assert_eq!(seen[1].state.activities().count(), 1);
        assert_eq!(seen[2].state.activities().count(), 2);
    }
}
