//! Error types for the Pokedex shell
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors returned by the expiring response cache.
///
/// Both variants are recoverable and carry the offending key for diagnostics.
/// The cache itself never logs, retries or panics; callers decide whether a
/// miss or a duplicate is actionable.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent or already reaped. Expected on every cache miss; callers
    /// fall back to a network fetch.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Key already present, whether stale or not. Callers treat this as a
    /// benign race (another path cached the same URL first) and proceed as
    /// if their own add succeeded.
    #[error("key already exists: {0}")]
    KeyExists(String),
}

// == App Error Enum ==
/// Unified error type for the command layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// An unexpected cache failure
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Writing command output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// `catch` invoked without a pokemon name
    #[error("no pokemon to catch")]
    NoPokemon,

    /// `inspect` invoked without a pokemon name
    #[error("no pokemon to inspect")]
    NoPokemonToInspect,

    /// `explore` invoked without an area name
    #[error("no area to explore")]
    NoAreaToExplore,

    /// `pokedex` invoked before anything was caught
    #[error("no pokedex found")]
    EmptyPokedex,
}

// == Result Type Alias ==
/// Convenience Result type for the command layer.
pub type Result<T> = std::result::Result<T, AppError>;
