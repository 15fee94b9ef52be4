//! Pokedex - an interactive PokeAPI shell
//!
//! Fetches and displays PokeAPI data behind a time-expiring response cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::{ApiClient, ApiFetch};
use pokedex::{Cache, CommandRegistry, Config, Session};

/// Main entry point for the Pokedex shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (this spawns its background reaper)
/// 4. Build the API client and session state
/// 5. Run the REPL until exit, end of input, or Ctrl-C
/// 6. Stop the cache reaper before the process terminates
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        area_url = %config.area_url,
        pokemon_url = %config.pokemon_url,
        cache_ttl_secs = config.cache_ttl_secs,
        "starting Pokedex shell"
    );

    let cache = Cache::new(Duration::from_secs(config.cache_ttl_secs));
    let api: Arc<dyn ApiFetch> = Arc::new(ApiClient::new());
    let mut session = Session::new(&config, cache.clone(), api);
    let registry = CommandRegistry::new();

    let result = pokedex::repl::run(&mut session, &registry).await;

    // Stop the reaper before exiting, whatever ended the loop.
    cache.done().await;
    info!("cache reaper stopped, shutdown complete");

    result?;
    Ok(())
}
