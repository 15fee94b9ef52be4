//! Cache-fronted fetch helper
//!
//! Every command that talks to the API goes through here: consult the cache
//! first, fetch on a miss, then record the body for the next caller.

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::session::Session;

/// Returns the response body for `url`, from cache when possible.
///
/// On a miss the body is fetched and added to the cache under the URL.
/// A [`CacheError::KeyExists`] from that add means another path cached the
/// same URL between our miss and our insert; the fetched body is returned
/// as if the add had succeeded.
pub async fn fetch_with_cache(session: &Session, url: &str) -> Result<Vec<u8>> {
    if let Ok(body) = session.cache.get(url).await {
        debug!(url, "cache hit");
        return Ok(body);
    }

    let body = session.api.fetch_bytes(url).await?;

    debug!(url, "caching response body");
    if let Err(err) = session.cache.add(url, body.clone()).await {
        match err {
            CacheError::KeyExists(_) => debug!(url, "already cached by a concurrent fetch"),
            other => return Err(other.into()),
        }
    }

    Ok(body)
}
