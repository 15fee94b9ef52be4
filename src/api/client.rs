//! PokeAPI HTTP client
//!
//! Fetches raw response bodies for the command layer. Retry and backoff are
//! deliberately absent; a failed request surfaces as an error and the cache
//! stays untouched.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;

/// Seam between the command layer and the network.
///
/// Production code uses [`ApiClient`]; tests substitute a stub that serves
/// fixture bodies.
#[async_trait]
pub trait ApiFetch: Send + Sync {
    /// Performs a GET request and returns the raw response body.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed [`ApiFetch`] implementation.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Creates a new ApiClient with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a new ApiClient from a preconfigured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiFetch for ApiClient {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
