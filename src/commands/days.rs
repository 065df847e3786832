//! Set the visible-day count.

use anyhow::Result;
use dayplan_core::EventType;

use crate::session::Session;

pub async fn run(count: i64) -> Result<()> {
    let mut session = Session::open(&[EventType::DaysVisibleChanged]).await?;
    // The engine clamps zero or negative counts to one day.
    session.engine.set_days_visible(count)?;
    session.close().await;
    Ok(())
}
