//! Configuration Module
//!
//! Handles loading shell configuration from environment variables.

use std::env;

/// Default base URL for location-area pages
pub const DEFAULT_AREA_URL: &str = "https://pokeapi.co/api/v2/location-area/";

/// Default base URL for pokemon lookups
pub const DEFAULT_POKEMON_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Default cache TTL in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 50;

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for location-area pages (the `map`/`mapb`/`explore` commands)
    pub area_url: String,
    /// Base URL for pokemon lookups (the `catch` command)
    pub pokemon_url: String,
    /// Response cache TTL in seconds; also the reaper sweep period
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_AREA_URL` - Location-area base URL (default: the public PokeAPI)
    /// - `POKEDEX_POKEMON_URL` - Pokemon base URL (default: the public PokeAPI)
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 50)
    pub fn from_env() -> Self {
        Self {
            area_url: env::var("POKEDEX_AREA_URL").unwrap_or_else(|_| DEFAULT_AREA_URL.to_string()),
            pokemon_url: env::var("POKEDEX_POKEMON_URL")
                .unwrap_or_else(|_| DEFAULT_POKEMON_URL.to_string()),
            cache_ttl_secs: env::var("POKEDEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area_url: DEFAULT_AREA_URL.to_string(),
            pokemon_url: DEFAULT_POKEMON_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.area_url, DEFAULT_AREA_URL);
        assert_eq!(config.pokemon_url, DEFAULT_POKEMON_URL);
        assert_eq!(config.cache_ttl_secs, 50);
    }

    // Env mutation kept in a single test so parallel test threads never race
    // on the same variables.
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEDEX_AREA_URL");
        env::remove_var("POKEDEX_POKEMON_URL");
        env::remove_var("POKEDEX_CACHE_TTL_SECS");

        let config = Config::from_env();
        assert_eq!(config.area_url, DEFAULT_AREA_URL);
        assert_eq!(config.pokemon_url, DEFAULT_POKEMON_URL);
        assert_eq!(config.cache_ttl_secs, 50);

        env::set_var("POKEDEX_AREA_URL", "http://localhost:8080/api/v2/location-area/");
        env::set_var("POKEDEX_CACHE_TTL_SECS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.area_url, "http://localhost:8080/api/v2/location-area/");
        assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);

        env::remove_var("POKEDEX_AREA_URL");
        env::remove_var("POKEDEX_CACHE_TTL_SECS");
    }
}
