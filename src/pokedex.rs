//! Pokedex Module
//!
//! In-memory registry of caught pokemon, safe for concurrent use.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::api::Pokemon;

/// Errors returned by the pokedex.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PokedexError {
    /// The named pokemon has not been caught
    #[error("pokemon not found")]
    PokemonNotFound,
}

/// Registry of caught pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    owned: RwLock<HashMap<String, Pokemon>>,
}

impl Pokedex {
    /// Creates an empty pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught pokemon. Catching the same pokemon again replaces
    /// the stored record.
    pub async fn add(&self, pokemon: Pokemon) {
        let mut owned = self.owned.write().await;
        owned.insert(pokemon.name.clone(), pokemon);
    }

    /// Releases a pokemon by name; releasing an unknown name is a no-op.
    pub async fn remove(&self, name: &str) {
        let mut owned = self.owned.write().await;
        owned.remove(name);
    }

    /// Returns all caught pokemon, sorted by name for stable output.
    pub async fn all(&self) -> Vec<Pokemon> {
        let owned = self.owned.read().await;
        let mut all: Vec<Pokemon> = owned.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Looks up a caught pokemon by name.
    pub async fn get(&self, name: &str) -> Result<Pokemon, PokedexError> {
        let owned = self.owned.read().await;
        owned.get(name).cloned().ok_or(PokedexError::PokemonNotFound)
    }
}
