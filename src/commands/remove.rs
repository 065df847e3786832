//! Remove an activity by id.

use anyhow::Result;
use dayplan_core::EventType;

use super::resolve_activity;
use crate::session::Session;

pub async fn run(id: &str) -> Result<()> {
    let mut session = Session::open(&[EventType::ActivityRemoved]).await?;

    let target = match session.engine.state() {
        Some(state) => resolve_activity(state, id)?,
        None => None,
    };

    match target {
        Some(target) => session.engine.remove_activity(&target)?,
        None => println!("No activity matching '{id}'"),
    }

    session.close().await;
    Ok(())
}
