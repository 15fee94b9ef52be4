//! Commands Module
//!
//! Command registration and dispatch for the interactive shell. Each command
//! is registered with a name and description; the help text is assembled
//! from the registry so it never drifts from what is actually dispatchable.

mod catch;
mod explore;
mod fetch;
mod inspect;
mod map;

pub use fetch::fetch_with_cache;

use std::io::Write;

use crate::error::{AppError, Result};
use crate::session::Session;

/// What the REPL should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep reading input
    Continue,
    /// Shut down the shell
    Exit,
}

/// Which handler a registered command maps to.
#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// A registered shell command.
#[derive(Debug, Clone, Copy)]
pub struct CliCommand {
    pub name: &'static str,
    pub description: &'static str,
    kind: CommandKind,
}

/// Ordered command registry.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CliCommand>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Registers the full command set.
    pub fn new() -> Self {
        let commands = vec![
            CliCommand {
                name: "help",
                description: "Displays a help message",
                kind: CommandKind::Help,
            },
            CliCommand {
                name: "exit",
                description: "Exit the Pokedex",
                kind: CommandKind::Exit,
            },
            CliCommand {
                name: "map",
                description: "Display the next page of location areas",
                kind: CommandKind::Map,
            },
            CliCommand {
                name: "mapb",
                description: "Display the previous page of location areas",
                kind: CommandKind::MapBack,
            },
            CliCommand {
                name: "explore",
                description: "List the pokemon found in the given areas",
                kind: CommandKind::Explore,
            },
            CliCommand {
                name: "catch",
                description: "Throw a Pokeball at the named pokemon",
                kind: CommandKind::Catch,
            },
            CliCommand {
                name: "inspect",
                description: "Show details about a caught pokemon",
                kind: CommandKind::Inspect,
            },
            CliCommand {
                name: "pokedex",
                description: "List all caught pokemon",
                kind: CommandKind::Pokedex,
            },
        ];
        Self { commands }
    }

    /// Looks up a command by name.
    pub fn find(&self, name: &str) -> Option<&CliCommand> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Assembles the help text from the registered commands.
    pub fn help_text(&self) -> String {
        let mut text = String::from("Welcome to the Pokedex!\nUsage:\n\n");
        for command in &self.commands {
            text.push_str(&format!("{}: {}\n", command.name, command.description));
        }
        text
    }

    /// Runs the named command against the session.
    ///
    /// Unknown names are reported on the session output and the shell keeps
    /// going; they are not an error.
    pub async fn dispatch(
        &self,
        session: &mut Session,
        name: &str,
        args: &[String],
    ) -> Result<CommandOutcome> {
        let Some(command) = self.find(name) else {
            writeln!(session.out, "Unknown command")?;
            return Ok(CommandOutcome::Continue);
        };

        match command.kind {
            CommandKind::Help => {
                write!(session.out, "{}", self.help_text())?;
                Ok(CommandOutcome::Continue)
            }
            CommandKind::Exit => {
                writeln!(session.out, "Closing the Pokedex... Goodbye!")?;
                Ok(CommandOutcome::Exit)
            }
            CommandKind::Map => map::forward(session).await,
            CommandKind::MapBack => map::back(session).await,
            CommandKind::Explore => explore::run(session, args).await,
            CommandKind::Catch => catch::run(session, args).await,
            CommandKind::Inspect => inspect::run(session, args).await,
            CommandKind::Pokedex => list_pokedex(session).await,
        }
    }
}

/// The `pokedex` command: lists everything caught so far.
async fn list_pokedex(session: &mut Session) -> Result<CommandOutcome> {
    let all = session.pokedex.all().await;
    if all.is_empty() {
        return Err(AppError::EmptyPokedex);
    }
    writeln!(session.out, "Your Pokedex:")?;
    for pokemon in all {
        writeln!(session.out, "  - {}", pokemon.name)?;
    }
    Ok(CommandOutcome::Continue)
}
