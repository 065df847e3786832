//! Show the visible window of upcoming days.

use anyhow::Result;
use dayplan_core::EventType;

use crate::session::Session;

pub async fn run() -> Result<()> {
    // The load notification renders the window; opening may also prune
    // stale entries, so flush the resulting save before exiting.
    let session = Session::open(&[EventType::Load]).await?;
    session.close().await;
    Ok(())
}
