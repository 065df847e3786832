//! Activities: the user-created items attached to calendar days.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{DayPlanError, DayPlanResult};
use crate::local_date::LocalDate;
use crate::recurrence::RepeatInterval;

/// Maximum length of an activity's text, in characters.
pub const MAX_TEXT_LEN: usize = 20;

/// Opaque identifier for one activity occurrence. Never changes once set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivityId(String);

/// Opaque identifier shared by every occurrence generated from one
/// recurring-add operation. Immutable once set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeriesId(String);

/// Older persisted states carry numeric ids; the wire shape allows both.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(u64),
}

impl IdRepr {
    fn into_string(self) -> String {
        match self {
            IdRepr::Text(s) => s,
            IdRepr::Number(n) => n.to_string(),
        }
    }
}

impl ActivityId {
    pub fn new() -> ActivityId {
        ActivityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        ActivityId::new()
    }
}

impl From<&str> for ActivityId {
    fn from(s: &str) -> Self {
        ActivityId(s.to_string())
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ActivityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ActivityId(IdRepr::deserialize(deserializer)?.into_string()))
    }
}

impl SeriesId {
    pub fn new() -> SeriesId {
        SeriesId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SeriesId {
    fn default() -> Self {
        SeriesId::new()
    }
}

impl From<&str> for SeriesId {
    fn from(s: &str) -> Self {
        SeriesId(s.to_string())
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SeriesId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SeriesId(IdRepr::deserialize(deserializer)?.into_string()))
    }
}

/// Closed color set for activities. Unknown strings are rejected when
/// deserializing persisted state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Goldenrod,
    Orchid,
    Yellow,
    GreenYellow,
    Pink,
    Firebrick,
    Purple,
    #[default]
    Transparent,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Goldenrod,
        Color::Orchid,
        Color::Yellow,
        Color::GreenYellow,
        Color::Pink,
        Color::Firebrick,
        Color::Purple,
        Color::Transparent,
    ];

    /// The CSS-style name, also the wire representation.
    pub fn name(self) -> &'static str {
        match self {
            Color::Goldenrod => "goldenrod",
            Color::Orchid => "orchid",
            Color::Yellow => "yellow",
            Color::GreenYellow => "greenyellow",
            Color::Pink => "pink",
            Color::Firebrick => "firebrick",
            Color::Purple => "purple",
            Color::Transparent => "transparent",
        }
    }

    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == name.to_ascii_lowercase())
    }
}

/// Closed icon set for activities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    School,
    Plane,
    Ship,
    Wedding,
    Hospital,
    Dance,
    Library,
    Music,
    Star,
    Grandma,
    Hamburger,
    Bagel,
    City,
    Car,
    Toy,
    Carousel,
    #[default]
    Empty,
}

impl Icon {
    pub const ALL: [Icon; 17] = [
        Icon::School,
        Icon::Plane,
        Icon::Ship,
        Icon::Wedding,
        Icon::Hospital,
        Icon::Dance,
        Icon::Library,
        Icon::Music,
        Icon::Star,
        Icon::Grandma,
        Icon::Hamburger,
        Icon::Bagel,
        Icon::City,
        Icon::Car,
        Icon::Toy,
        Icon::Carousel,
        Icon::Empty,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::School => "school",
            Icon::Plane => "plane",
            Icon::Ship => "ship",
            Icon::Wedding => "wedding",
            Icon::Hospital => "hospital",
            Icon::Dance => "dance",
            Icon::Library => "library",
            Icon::Music => "music",
            Icon::Star => "star",
            Icon::Grandma => "grandma",
            Icon::Hamburger => "hamburger",
            Icon::Bagel => "bagel",
            Icon::City => "city",
            Icon::Car => "car",
            Icon::Toy => "toy",
            Icon::Carousel => "carousel",
            Icon::Empty => "empty",
        }
    }

    pub fn from_name(name: &str) -> Option<Icon> {
        Icon::ALL
            .into_iter()
            .find(|i| i.name() == name.to_ascii_lowercase())
    }

    /// The glyph shown next to the activity text.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::School => "🏫",
            Icon::Plane => "🛫",
            Icon::Ship => "🛳",
            Icon::Wedding => "⛪",
            Icon::Hospital => "🏥",
            Icon::Dance => "💃",
            Icon::Library => "📚",
            Icon::Music => "🎼",
            Icon::Star => "★",
            Icon::Grandma => "👵",
            Icon::Hamburger => "🍔",
            Icon::Bagel => "🥯",
            Icon::City => "🏙",
            Icon::Car => "🚗",
            Icon::Toy => "🧸",
            Icon::Carousel => "🎠",
            Icon::Empty => "",
        }
    }
}

/// One occurrence of a user-created item on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default)]
    pub series: Option<SeriesId>,
    pub text: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub icon: Icon,
}

/// The payload of an add-activity intent, before ids are allocated.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub text: String,
    pub color: Color,
    pub icon: Icon,
    pub repeat: RepeatInterval,
    pub repeat_until: Option<LocalDate>,
}

impl ActivityDraft {
    pub fn validate(&self) -> DayPlanResult<()> {
        validate_text(&self.text)
    }
}

/// Field changes applied to one occurrence or a whole series. Identity
/// (`id`) and series membership are structurally out of reach here.
#[derive(Debug, Clone)]
pub struct ActivityPatch {
    pub text: String,
    pub color: Color,
    pub icon: Icon,
}

impl ActivityPatch {
    pub fn validate(&self) -> DayPlanResult<()> {
        validate_text(&self.text)
    }

    pub fn apply_to(&self, activity: &mut Activity) {
        activity.text = self.text.clone();
        activity.color = self.color;
        activity.icon = self.icon;
    }
}

pub(crate) fn validate_text(text: &str) -> DayPlanResult<()> {
    let len = text.chars().count();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(DayPlanError::InvalidActivity(format!(
            "text must be 1 to {MAX_TEXT_LEN} characters, got {len}"
        )));
    }
    Ok(())
}
