//! The `catch` command
//!
//! Fetches the named pokemon and rolls against its base experience; a caught
//! pokemon enters the pokedex.

use std::io::Write;

use tracing::warn;

use crate::api::Pokemon;
use crate::commands::{fetch_with_cache, CommandOutcome};
use crate::error::{AppError, Result};
use crate::session::Session;

/// Attempts to catch each named pokemon. A fetch or decode failure for one
/// name is logged and the remaining names are still attempted.
pub async fn run(session: &mut Session, args: &[String]) -> Result<CommandOutcome> {
    if args.is_empty() {
        return Err(AppError::NoPokemon);
    }

    for name in args {
        writeln!(session.out, "Throwing a Pokeball at {}...", name)?;
        let url = format!("{}{}", session.pokemon_url, name);
        if let Err(err) = try_catch(session, &url).await {
            warn!(%err, pokemon = name.as_str(), "failed to catch pokemon");
        }
        writeln!(session.out)?;
    }

    Ok(CommandOutcome::Continue)
}

async fn try_catch(session: &mut Session, url: &str) -> Result<()> {
    let body = fetch_with_cache(session, url).await?;
    let pokemon: Pokemon = serde_json::from_slice(&body)?;

    let roll = (session.catch_roll)();
    if roll < catch_chance(&pokemon) {
        writeln!(session.out, "{} was caught!", pokemon.name)?;
        session.pokedex.add(pokemon).await;
    } else {
        writeln!(session.out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}

/// Catch probability in `(0, 1]`, decreasing with base experience. A pokemon
/// with no reported base experience is always caught.
fn catch_chance(pokemon: &Pokemon) -> f64 {
    let base_experience = pokemon.base_experience.unwrap_or(0).max(0) as f64;
    50.0 / (base_experience + 50.0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon_with_base_experience(base_experience: Option<i64>) -> Pokemon {
        let value = match base_experience {
            Some(v) => v.to_string(),
            None => "null".to_string(),
        };
        serde_json::from_str(&format!(
            r#"{{"id": 151, "name": "mew", "base_experience": {}, "height": 4, "weight": 40}}"#,
            value
        ))
        .unwrap()
    }

    #[test]
    fn test_catch_chance_decreases_with_base_experience() {
        let weak = pokemon_with_base_experience(Some(50));
        let strong = pokemon_with_base_experience(Some(300));

        assert!(catch_chance(&weak) > catch_chance(&strong));
        assert_eq!(catch_chance(&weak), 0.5);
    }

    #[test]
    fn test_catch_chance_unknown_base_experience_is_certain() {
        let unknown = pokemon_with_base_experience(None);

        assert_eq!(catch_chance(&unknown), 1.0);
    }
}
