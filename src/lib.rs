//! Pokedex - an interactive PokeAPI shell
//!
//! Fetches and displays PokeAPI data behind a time-expiring, concurrency-safe
//! response cache with a background reaper.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod pokedex;
pub mod repl;
pub mod session;

pub use cache::Cache;
pub use commands::CommandRegistry;
pub use config::Config;
pub use session::Session;
