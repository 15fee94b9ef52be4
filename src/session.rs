//! Session Module
//!
//! Mutable shell state threaded through every command: pagination cursors,
//! the response cache, the API client, the pokedex, plus the output and
//! randomness seams the tests substitute.

use std::io::Write;
use std::sync::Arc;

use crate::api::ApiFetch;
use crate::cache::Cache;
use crate::config::Config;
use crate::pokedex::Pokedex;

/// Produces the uniform roll in `[0, 1)` deciding a catch attempt.
pub type CatchRoll = Box<dyn FnMut() -> f64 + Send>;

/// State shared by all command handlers for the lifetime of the shell.
pub struct Session {
    /// URL of the next location-area page; None once the last page was shown
    pub next: Option<String>,
    /// URL of the previous page; None on the first page
    pub previous: Option<String>,
    /// Base URL for location-area lookups
    pub area_url: String,
    /// Base URL for pokemon lookups
    pub pokemon_url: String,
    /// Response cache, consulted before every fetch
    pub cache: Cache,
    /// Network seam
    pub api: Arc<dyn ApiFetch>,
    /// Caught pokemon
    pub pokedex: Pokedex,
    /// Command output sink, stdout in production
    pub out: Box<dyn Write + Send>,
    /// Randomness seam for the catch roll
    pub catch_roll: CatchRoll,
}

impl Session {
    /// Creates a session writing to stdout with a real random catch roll.
    pub fn new(config: &Config, cache: Cache, api: Arc<dyn ApiFetch>) -> Self {
        Self {
            next: Some(config.area_url.clone()),
            previous: None,
            area_url: config.area_url.clone(),
            pokemon_url: config.pokemon_url.clone(),
            cache,
            api,
            pokedex: Pokedex::new(),
            out: Box::new(std::io::stdout()),
            catch_roll: Box::new(rand::random::<f64>),
        }
    }

    /// Redirects command output, used by tests to capture it.
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    /// Overrides the catch roll, used by tests to force a catch or an escape.
    pub fn with_catch_roll(mut self, roll: CatchRoll) -> Self {
        self.catch_roll = roll;
        self
    }
}
