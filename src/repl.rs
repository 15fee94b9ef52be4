//! REPL Module
//!
//! The interactive read-eval-print loop: prompt, input normalization,
//! dispatch, and interrupt handling.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{error, info};

use crate::commands::{CommandOutcome, CommandRegistry};
use crate::error::Result;
use crate::session::Session;

/// Lowercases and whitespace-splits one line of input. The first word is the
/// command name, the rest are its arguments.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Runs the shell until `exit`, end of input, or Ctrl-C.
///
/// Command failures are logged and the loop keeps going; only I/O failures
/// on stdin/stdout terminate it. The caller shuts the cache down afterwards.
pub async fn run(session: &mut Session, registry: &CommandRegistry) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
        };
        let Some(line) = line else {
            // End of input
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        match registry.dispatch(session, name, args).await {
            Ok(CommandOutcome::Exit) => break,
            Ok(CommandOutcome::Continue) => {}
            Err(err) => error!(%err, command = name.as_str(), "command failed"),
        }
    }

    Ok(())
}
