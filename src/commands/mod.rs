pub mod add;
pub mod days;
pub mod remove;
pub mod show;
pub mod update;

use anyhow::{bail, Result};
use dayplan_core::{ActivityId, CalendarState, Color, Icon};

/// Parse a color name, listing the valid set on failure.
pub(crate) fn parse_color(name: &str) -> Result<Color> {
    match Color::from_name(name) {
        Some(color) => Ok(color),
        None => {
            let valid: Vec<_> = Color::ALL.iter().map(|c| c.name()).collect();
            bail!("Unknown color '{}'. Valid colors: {}", name, valid.join(", "))
        }
    }
}

/// Parse an icon name, listing the valid set on failure.
pub(crate) fn parse_icon(name: &str) -> Result<Icon> {
    match Icon::from_name(name) {
        Some(icon) => Ok(icon),
        None => {
            let valid: Vec<_> = Icon::ALL.iter().map(|i| i.name()).collect();
            bail!("Unknown icon '{}'. Valid icons: {}", name, valid.join(", "))
        }
    }
}

/// Resolve a full id or a unique prefix against the loaded state.
///
/// No match is not an error (removal and update are idempotent); an
/// ambiguous prefix is.
pub(crate) fn resolve_activity(state: &CalendarState, id: &str) -> Result<Option<ActivityId>> {
    let matches: Vec<&ActivityId> = state
        .activities()
        .map(|a| &a.id)
        .filter(|candidate| candidate.as_str().starts_with(id))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some((*only).clone())),
        _ => bail!(
            "'{}' matches {} activities; use a longer id prefix",
            id,
            matches.len()
        ),
    }
}
