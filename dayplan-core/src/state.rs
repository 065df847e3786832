//! The sparse, date-keyed calendar state and its mutation operations.
//!
//! `CalendarState` is both the in-memory store and the persisted wire shape:
//! it serializes directly to the JSON that storage backends read and write.
//! Mutations here never touch persistence or notification; the engine owns
//! that choreography.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityId, ActivityPatch, SeriesId};
use crate::local_date::LocalDate;

fn default_days_visible() -> u32 {
    7
}

/// The activities attached to one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(rename = "dateString")]
    pub date: LocalDate,
    pub activities: Vec<Activity>,
}

impl CalendarEntry {
    pub fn new(date: LocalDate) -> CalendarEntry {
        CalendarEntry {
            date,
            activities: Vec::new(),
        }
    }
}

/// The full calendar state: how many days the user is looking at, plus a
/// sparse map from canonical ISO date keys to entries.
///
/// A `BTreeMap` keeps persisted output deterministic and date-ordered.
/// An entry with no activities is equivalent to absent and is pruned by
/// the operations that can empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarState {
    #[serde(rename = "daysVisible", default = "default_days_visible")]
    pub days_visible: u32,
    #[serde(rename = "calendarEntries", default)]
    pub entries: BTreeMap<String, CalendarEntry>,
}

impl Default for CalendarState {
    fn default() -> Self {
        CalendarState::new(default_days_visible())
    }
}

impl CalendarState {
    pub fn new(days_visible: u32) -> CalendarState {
        CalendarState {
            days_visible: days_visible.max(1),
            entries: BTreeMap::new(),
        }
    }

    /// Append an activity to the given date, creating the entry if absent.
    pub fn upsert_activity(&mut self, date: LocalDate, activity: Activity) {
        self.entries
            .entry(date.to_iso())
            .or_insert_with(|| CalendarEntry::new(date))
            .activities
            .push(activity);
    }

    /// Remove the activity with the given id, pruning its entry if that
    /// leaves it empty. Unknown ids are a silent no-op; returns whether
    /// anything was removed.
    pub fn remove_activity(&mut self, id: &ActivityId) -> bool {
        let Some(key) = self.key_holding(id) else {
            return false;
        };
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.activities.retain(|a| a.id != *id);
            if entry.activities.is_empty() {
                self.entries.remove(&key);
            }
        }
        true
    }

    /// Replace the mutable fields of one activity in place, preserving its
    /// id and series membership. Unknown ids are a silent no-op; returns
    /// whether anything changed.
    pub fn update_activity(&mut self, id: &ActivityId, patch: &ActivityPatch) -> bool {
        for entry in self.entries.values_mut() {
            if let Some(activity) = entry.activities.iter_mut().find(|a| a.id == *id) {
                patch.apply_to(activity);
                return true;
            }
        }
        false
    }

    /// Apply the same field changes to every activity sharing the series.
    /// Returns how many occurrences were touched.
    pub fn update_series(&mut self, series: &SeriesId, patch: &ActivityPatch) -> usize {
        let mut touched = 0;
        for entry in self.entries.values_mut() {
            for activity in &mut entry.activities {
                if activity.series.as_ref() == Some(series) {
                    patch.apply_to(activity);
                    touched += 1;
                }
            }
        }
        touched
    }

    /// Clamp and store the visible-day count. Zero becomes one.
    pub fn set_days_visible(&mut self, days_visible: u32) {
        self.days_visible = days_visible.max(1);
    }

    /// Delete every entry dated strictly before the given date.
    pub fn prune_before(&mut self, date: LocalDate) {
        self.entries.retain(|_, entry| entry.date >= date);
    }

    pub fn entry(&self, date: LocalDate) -> Option<&CalendarEntry> {
        self.entries.get(&date.to_iso())
    }

    /// All activities across all entries, in date order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.entries.values().flat_map(|e| e.activities.iter())
    }

    pub fn find_activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities().find(|a| a.id == *id)
    }

    // Scan for the entry owning an activity. Entry counts stay small
    // (visible window plus recent history), so a linear scan is fine.
    fn key_holding(&self, id: &ActivityId) -> Option<String> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.activities.iter().any(|a| a.id == *id))
            .map(|(key, _)| key.clone())
    }
}
