//! PokeAPI response models
//!
//! serde views over the subset of PokeAPI fields the commands display.
//! Unknown fields are ignored; decoding is the only validation performed.

use serde::Deserialize;

/// A `{ name, url }` reference, PokeAPI's universal link shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated location-area listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    /// URL of the next page, None on the last page
    pub next: Option<String>,
    /// URL of the previous page, None on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A pokemon sighting within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Detail view of a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single stat line of a pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: i64,
    pub stat: NamedResource,
}

/// A type assignment of a pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The pokemon fields shown by `catch` and `inspect`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    /// Drives the catch difficulty; PokeAPI reports null for some forms
    #[serde(default)]
    pub base_experience: Option<i64>,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}
