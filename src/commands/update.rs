//! Update one activity, or every occurrence in its series.

use anyhow::Result;
use dayplan_core::{Activity, ActivityPatch, EventType};

use super::{parse_color, parse_icon, resolve_activity};
use crate::session::Session;

pub async fn run(
    id: &str,
    text: Option<String>,
    color: Option<String>,
    icon: Option<String>,
    series: bool,
) -> Result<()> {
    let mut session = Session::open(&[EventType::ActivityUpdated]).await?;

    let existing: Option<Activity> = match session.engine.state() {
        Some(state) => resolve_activity(state, id)?
            .and_then(|target| state.find_activity(&target))
            .cloned(),
        None => None,
    };
    let Some(existing) = existing else {
        println!("No activity matching '{id}'");
        session.close().await;
        return Ok(());
    };

    // Unspecified fields keep their current values.
    let patch = ActivityPatch {
        text: text.unwrap_or_else(|| existing.text.clone()),
        color: color.as_deref().map(parse_color).transpose()?.unwrap_or(existing.color),
        icon: icon.as_deref().map(parse_icon).transpose()?.unwrap_or(existing.icon),
    };
    patch.validate()?;

    if series {
        match &existing.series {
            Some(series_id) => session.engine.update_series(series_id, patch)?,
            None => {
                println!("Activity '{id}' does not repeat; updating it alone");
                session.engine.update_activity(&existing.id, patch)?;
            }
        }
    } else {
        session.engine.update_activity(&existing.id, patch)?;
    }

    session.close().await;
    Ok(())
}
