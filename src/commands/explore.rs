//! The `explore` command
//!
//! Lists the pokemon found in each named location area.

use std::io::Write;

use tracing::warn;

use crate::api::LocationAreaDetail;
use crate::commands::{fetch_with_cache, CommandOutcome};
use crate::error::{AppError, Result};
use crate::session::Session;

/// Explores each named area in turn. A failure for one area is logged and
/// the remaining areas are still explored.
pub async fn run(session: &mut Session, args: &[String]) -> Result<CommandOutcome> {
    if args.is_empty() {
        return Err(AppError::NoAreaToExplore);
    }

    for area in args {
        let url = format!("{}{}", session.area_url, area);
        writeln!(session.out, "Exploring area: {}", area)?;
        writeln!(session.out, "===================================")?;
        if let Err(err) = list_pokemon_in_area(session, &url).await {
            warn!(%err, area = area.as_str(), "failed to explore area");
        }
        writeln!(session.out, "===================================")?;
        writeln!(session.out)?;
    }

    Ok(CommandOutcome::Continue)
}

async fn list_pokemon_in_area(session: &mut Session, url: &str) -> Result<()> {
    let body = fetch_with_cache(session, url).await?;
    let detail: LocationAreaDetail = serde_json::from_slice(&body)?;

    for (i, encounter) in detail.pokemon_encounters.iter().enumerate() {
        writeln!(session.out, "Pokemon #{}: {}", i + 1, encounter.pokemon.name)?;
    }
    Ok(())
}
