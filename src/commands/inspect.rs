//! The `inspect` command
//!
//! Prints the stored details of caught pokemon.

use std::io::Write;

use crate::commands::CommandOutcome;
use crate::error::{AppError, Result};
use crate::pokedex::PokedexError;
use crate::session::Session;

pub async fn run(session: &mut Session, args: &[String]) -> Result<CommandOutcome> {
    if args.is_empty() {
        return Err(AppError::NoPokemonToInspect);
    }

    for name in args {
        match session.pokedex.get(name).await {
            Ok(pokemon) => {
                writeln!(session.out, "Name: {}", pokemon.name)?;
                writeln!(session.out, "Height: {}", pokemon.height)?;
                writeln!(session.out, "Weight: {}", pokemon.weight)?;
                writeln!(session.out, "Stats:")?;
                for stat in &pokemon.stats {
                    writeln!(session.out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
                }
                writeln!(session.out, "Types:")?;
                for t in &pokemon.types {
                    writeln!(session.out, "  -{}", t.kind.name)?;
                }
            }
            Err(PokedexError::PokemonNotFound) => {
                writeln!(session.out, "you have not caught that pokemon")?;
            }
        }
    }

    Ok(CommandOutcome::Continue)
}
