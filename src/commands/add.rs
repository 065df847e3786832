//! Add an activity, expanding repeat fields into a series.

use anyhow::{bail, Context, Result};
use dayplan_core::{ActivityDraft, Color, EventType, Icon, LocalDate, RepeatInterval};

use super::{parse_color, parse_icon};
use crate::session::Session;

pub async fn run(
    date: &str,
    text: &str,
    color: Option<String>,
    icon: Option<String>,
    repeat: Option<String>,
    until: Option<String>,
) -> Result<()> {
    let anchor = LocalDate::from_iso(date)
        .with_context(|| format!("'{date}' is not a valid YYYY-MM-DD date"))?;

    let repeat = match repeat.as_deref() {
        Some(name) => {
            let interval = RepeatInterval::from_name(name);
            if interval == RepeatInterval::None && !name.eq_ignore_ascii_case("none") {
                bail!("Unknown repeat cadence '{name}'. Valid cadences: daily, weekly, none");
            }
            interval
        }
        None => RepeatInterval::None,
    };

    let repeat_until = until
        .map(|s| {
            LocalDate::from_iso(&s)
                .with_context(|| format!("'{s}' is not a valid YYYY-MM-DD date"))
        })
        .transpose()?;

    if let Some(end) = repeat_until {
        if repeat != RepeatInterval::None && end < anchor {
            bail!("--until {} is before the start date {}", end, anchor);
        }
    }

    let draft = ActivityDraft {
        text: text.to_string(),
        color: color.as_deref().map(parse_color).transpose()?.unwrap_or(Color::Transparent),
        icon: icon.as_deref().map(parse_icon).transpose()?.unwrap_or(Icon::Empty),
        repeat,
        repeat_until,
    };
    // The engine drops invalid drafts silently; surface the reason here.
    draft.validate()?;

    let mut session = Session::open(&[EventType::ActivityAdded]).await?;
    session.engine.add_activity(anchor, draft)?;
    session.close().await;
    Ok(())
}
