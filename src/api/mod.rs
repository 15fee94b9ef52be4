//! PokeAPI client and response models
//!
//! The HTTP side of the shell: a small fetch trait the commands call through,
//! its reqwest implementation, and the serde models for the responses.

mod client;
mod models;

pub use client::{ApiClient, ApiFetch};
pub use models::{
    LocationAreaDetail, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
