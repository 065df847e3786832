//! Terminal rendering for the calendar window.
//!
//! This is the presentation collaborator: `TerminalView` subscribes to the
//! engine and reprints the visible window of upcoming days when one of the
//! events it cares about arrives. Holiday lookups happen here, at format
//! time; the engine never consults them.

use dayplan_core::{
    holidays_on, Activity, CalendarState, Color, DayOfWeekExt, EventType, LocalDate, Notification,
    Observer,
};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering of dayplan types.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Activity {
    fn render(&self) -> String {
        let glyph = self.icon.glyph();
        let text = paint(self.color, &self.text);
        let id = format!("[{}]", short_id(self.id.as_str())).dimmed().to_string();
        let series_marker = if self.series.is_some() { " ↻" } else { "" };
        if glyph.is_empty() {
            format!("{text}{series_marker} {id}")
        } else {
            format!("{glyph} {text}{series_marker} {id}")
        }
    }
}

/// Render one day of the window: a header line plus its activities.
fn render_day(date: LocalDate, state: &CalendarState) -> String {
    let holidays = holidays_on(date);
    let icons: String = holidays.iter().map(|h| h.icon()).collect();
    let marker = if icons.is_empty() { "🗓" } else { &icons };

    let weekday = date.day_of_week().full_name();
    let header = format!("{} {} {}", marker, weekday, date.to_locale_string());
    let header = if date.is_weekend() {
        header.magenta().to_string()
    } else {
        header.yellow().to_string()
    };

    let mut lines = vec![header];
    for holiday in &holidays {
        lines.push(format!("   {}", holiday.name().dimmed()));
    }
    if let Some(entry) = state.entry(date) {
        for activity in &entry.activities {
            lines.push(format!("   {}", activity.render()));
        }
    }
    lines.join("\n")
}

/// Render the scrolling window: today through today + daysVisible - 1.
pub fn render_window(state: &CalendarState) -> String {
    let mut days = Vec::with_capacity(state.days_visible as usize);
    let mut date = LocalDate::today();
    for _ in 0..state.days_visible {
        days.push(render_day(date, state));
        date = date.next();
    }
    days.join("\n")
}

/// First chunk of a uuid is plenty to identify an activity interactively.
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Goldenrod => text.yellow().to_string(),
        Color::Orchid => text.magenta().to_string(),
        Color::Yellow => text.bright_yellow().to_string(),
        Color::GreenYellow => text.bright_green().to_string(),
        Color::Pink => text.bright_magenta().to_string(),
        Color::Firebrick => text.red().to_string(),
        Color::Purple => text.purple().to_string(),
        Color::Transparent => text.to_string(),
    }
}

/// Engine observer that reprints the window on selected events.
pub struct TerminalView {
    render_on: Vec<EventType>,
}

impl TerminalView {
    pub fn new(render_on: &[EventType]) -> TerminalView {
        TerminalView {
            render_on: render_on.to_vec(),
        }
    }
}

impl Observer for TerminalView {
    fn on_update(&self, notification: &Notification) {
        if self.render_on.contains(&notification.event) {
            println!("{}", render_window(&notification.state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::{ActivityId, Icon};

    fn activity(text: &str, icon: Icon) -> Activity {
        Activity {
            id: ActivityId::from("aaaaaaaa-0000-0000-0000-000000000000"),
            series: None,
            text: text.to_string(),
            color: Color::Transparent,
            icon,
        }
    }

    #[test]
    fn test_activity_render_contains_text_and_short_id() {
        let rendered = activity("swim", Icon::Star).render();
        assert!(rendered.contains("swim"));
        assert!(rendered.contains("aaaaaaaa"));
        assert!(!rendered.contains("aaaaaaaa-0000"));
    }

    #[test]
    fn test_window_spans_days_visible() {
        let mut state = CalendarState::new(3);
        state.upsert_activity(LocalDate::today(), activity("today", Icon::Empty));

        let window = render_window(&state);
        // 3 headers + 1 activity line, plus a name line when a holiday lands
        // in the window
        assert!(window.lines().count() >= 4);
        assert!(window.contains("today"));
    }

    #[test]
    fn test_short_id_of_non_uuid_is_unchanged() {
        assert_eq!(short_id("8675309"), "8675309");
    }
}
