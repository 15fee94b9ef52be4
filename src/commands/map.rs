//! The `map` and `mapb` commands
//!
//! Page forward and backward through the location-area listing, keeping the
//! session's pagination cursors in step with the API's `next`/`previous`
//! links.

use std::io::Write;

use crate::api::LocationAreaPage;
use crate::commands::{fetch_with_cache, CommandOutcome};
use crate::error::Result;
use crate::session::Session;

/// The `map` command: shows the next page of location areas.
pub async fn forward(session: &mut Session) -> Result<CommandOutcome> {
    let Some(url) = session.next.clone() else {
        writeln!(session.out, "you're on the last page")?;
        return Ok(CommandOutcome::Continue);
    };
    list_page(session, &url).await?;
    Ok(CommandOutcome::Continue)
}

/// The `mapb` command: shows the previous page of location areas.
pub async fn back(session: &mut Session) -> Result<CommandOutcome> {
    let Some(url) = session.previous.clone() else {
        writeln!(session.out, "you're on the first page")?;
        return Ok(CommandOutcome::Continue);
    };
    list_page(session, &url).await?;
    Ok(CommandOutcome::Continue)
}

async fn list_page(session: &mut Session, url: &str) -> Result<()> {
    let body = fetch_with_cache(session, url).await?;
    let page: LocationAreaPage = serde_json::from_slice(&body)?;

    for location in &page.results {
        writeln!(session.out, "{}", location.name)?;
    }

    session.next = page.next;
    session.previous = page.previous;
    Ok(())
}
