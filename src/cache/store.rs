//! Cache Store Module
//!
//! Time-expiring response cache keyed by request URL, with a background
//! reaper task that evicts entries older than the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheEntry;
use crate::error::CacheError;

/// Shared entry map; guarded so mutation only ever happens under the writer
/// side of the lock and reads under at least the reader side.
type EntryMap = Arc<RwLock<HashMap<String, CacheEntry>>>;

/// One-shot shutdown signal plus the reaper's join handle, consumed together
/// on the first `done` call.
struct ReaperControl {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

// == Cache ==
/// Concurrency-safe response cache with a fixed TTL.
///
/// A `Cache` owns its entry map and exactly one background reaper task,
/// started at construction and driven by a periodic timer firing every TTL
/// interval. Cloning the handle shares the same underlying map and reaper.
///
/// Entries are write-once per key: inserting a duplicate key is rejected with
/// [`CacheError::KeyExists`] and leaves the existing entry untouched. Expiry
/// is reaper-driven only; a stale entry stays readable until the next sweep
/// removes it (no on-read lazy expiry).
#[derive(Clone)]
pub struct Cache {
    entries: EntryMap,
    ttl: Duration,
    reaper: Arc<Mutex<Option<ReaperControl>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and spawns its background reaper.
    ///
    /// The reaper sweeps the map every `ttl` interval and runs until
    /// [`Cache::done`] is called.
    pub fn new(ttl: Duration) -> Self {
        let entries: EntryMap = Arc::new(RwLock::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(reap_loop(Arc::clone(&entries), ttl, shutdown_rx));

        Self {
            entries,
            ttl,
            reaper: Arc::new(Mutex::new(Some(ReaperControl {
                shutdown: shutdown_tx,
                handle,
            }))),
        }
    }

    // == Get ==
    /// Looks up a cached body by key.
    ///
    /// Returns [`CacheError::KeyNotFound`] when the key is absent or was
    /// already reaped. Does not reset or extend the entry's age.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))
    }

    // == Add ==
    /// Inserts a body under a key, stamped with the current time.
    ///
    /// Existence alone is checked, not staleness: if the key is already
    /// present (expired or not) the existing entry is left untouched and
    /// [`CacheError::KeyExists`] is returned.
    pub async fn add(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return Err(CacheError::KeyExists(key.to_string()));
        }
        entries.insert(key.to_string(), CacheEntry::new(value));
        Ok(())
    }

    // == Done ==
    /// Signals the reaper to stop and waits until it has exited.
    ///
    /// When `done` returns, the periodic timer is stopped and no further
    /// sweep will run. Idempotent: the shutdown signal is consumed on the
    /// first call, so later calls (from this or any cloned handle) return
    /// immediately.
    pub async fn done(&self) {
        let control = self.reaper.lock().await.take();
        if let Some(ReaperControl { shutdown, handle }) = control {
            // Send may fail only if the reaper already exited; join either way.
            let _ = shutdown.send(());
            let _ = handle.await;
        }
    }

    // == TTL ==
    /// The fixed entry lifetime this cache was constructed with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Current number of entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").field("ttl", &self.ttl).finish()
    }
}

// == Reaper ==
/// Background sweep loop, one per cache instance.
///
/// Each tick snapshots the candidate keys under the read lock, then visits
/// them one at a time, re-acquiring the write lock per key. The per-entry
/// lock acquisition keeps critical sections short so foreground `get`/`add`
/// calls are not starved during a sweep.
async fn reap_loop(entries: EntryMap, ttl: Duration, mut shutdown: oneshot::Receiver<()>) {
    let mut ticker = tokio::time::interval(ttl);
    // The first tick of a tokio interval completes immediately; consume it so
    // sweeps start one full period after construction.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let candidates: Vec<String> = entries.read().await.keys().cloned().collect();
                let mut removed = 0usize;
                for key in candidates {
                    let mut map = entries.write().await;
                    if map.get(&key).is_some_and(|entry| entry.is_expired(ttl)) {
                        map.remove(&key);
                        removed += 1;
                    }
                }
                if removed > 0 {
                    debug!(removed, "reaped expired cache entries");
                }
            }
            _ = &mut shutdown => {
                debug!("cache reaper stopping");
                break;
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_get_miss_returns_key_not_found() {
        let cache = Cache::new(Duration::from_secs(20));

        let result = cache.get("https://pokeapi.co/api/v2/location-area/").await;

        match result {
            Err(CacheError::KeyNotFound(key)) => {
                assert_eq!(key, "https://pokeapi.co/api/v2/location-area/");
            }
            other => panic!("expected KeyNotFound, got {:?}", other),
        }

        cache.done().await;
    }

    #[tokio::test]
    async fn test_add_then_get_returns_value() {
        let cache = Cache::new(Duration::from_secs(20));

        cache.add("url1", b"A".to_vec()).await.unwrap();

        assert_eq!(cache.get("url1").await.unwrap(), b"A");
        assert_eq!(cache.len().await, 1);

        cache.done().await;
    }

    #[tokio::test]
    async fn test_duplicate_add_rejected_and_first_value_kept() {
        let cache = Cache::new(Duration::from_secs(20));

        cache.add("url1", b"v1".to_vec()).await.unwrap();
        let second = cache.add("url1", b"v2".to_vec()).await;

        match second {
            Err(CacheError::KeyExists(key)) => assert_eq!(key, "url1"),
            other => panic!("expected KeyExists, got {:?}", other),
        }
        assert_eq!(cache.get("url1").await.unwrap(), b"v1");

        cache.done().await;
    }

    #[tokio::test]
    async fn test_entry_reaped_after_ttl() {
        // ttl = 50ms: hit at t=10ms, reaped by t=120ms (one full period past
        // the TTL covers timer jitter).
        let cache = Cache::new(Duration::from_millis(50));

        cache.add("url1", b"A".to_vec()).await.unwrap();

        sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.get("url1").await.unwrap(), b"A");

        sleep(Duration::from_millis(110)).await;
        assert!(matches!(
            cache.get("url1").await,
            Err(CacheError::KeyNotFound(_))
        ));
        assert!(cache.is_empty().await);

        cache.done().await;
    }

    #[tokio::test]
    async fn test_get_does_not_extend_entry_life() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.add("url1", b"A".to_vec()).await.unwrap();

        // Keep reading while the entry ages out; reads must not refresh it.
        for _ in 0..6 {
            let _ = cache.get("url1").await;
            sleep(Duration::from_millis(25)).await;
        }

        assert!(matches!(
            cache.get("url1").await,
            Err(CacheError::KeyNotFound(_))
        ));

        cache.done().await;
    }

    #[tokio::test]
    async fn test_concurrent_adds_distinct_keys_all_visible() {
        let cache = Cache::new(Duration::from_secs(20));

        let mut handles = Vec::new();
        for i in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.add(&format!("url{}", i), vec![i as u8]).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for i in 0..16 {
            assert_eq!(cache.get(&format!("url{}", i)).await.unwrap(), vec![i as u8]);
        }
        assert_eq!(cache.len().await, 16);

        cache.done().await;
    }

    #[tokio::test]
    async fn test_concurrent_adds_same_key_exactly_one_wins() {
        let cache = Cache::new(Duration::from_secs(20));

        let mut handles = Vec::new();
        for i in 0..16u8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let result = cache.add("url1", vec![i]).await;
                (i, result)
            }));
        }

        let mut winners = Vec::new();
        let mut exists_errors = 0;
        for handle in handles {
            let (i, result) = handle.await.unwrap();
            match result {
                Ok(()) => winners.push(i),
                Err(CacheError::KeyExists(_)) => exists_errors += 1,
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(winners.len(), 1, "exactly one add must succeed");
        assert_eq!(exists_errors, 15);
        assert_eq!(cache.get("url1").await.unwrap(), vec![winners[0]]);

        cache.done().await;
    }

    #[tokio::test]
    async fn test_done_stops_reaping() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.add("url1", b"A".to_vec()).await.unwrap();
        cache.done().await;

        // The entry outlives its TTL but no sweep runs after shutdown.
        sleep(Duration::from_millis(150)).await;
        assert_eq!(cache.get("url1").await.unwrap(), b"A");
    }

    #[tokio::test]
    async fn test_done_is_idempotent() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.done().await;
        cache.done().await;

        // A cloned handle shares the consumed signal as well.
        cache.clone().done().await;
    }

    #[tokio::test]
    async fn test_get_add_usable_from_cloned_handles() {
        let cache = Cache::new(Duration::from_secs(20));
        let other = cache.clone();

        cache.add("url1", b"A".to_vec()).await.unwrap();

        assert_eq!(other.get("url1").await.unwrap(), b"A");
        assert!(matches!(
            other.add("url1", b"B".to_vec()).await,
            Err(CacheError::KeyExists(_))
        ));

        cache.done().await;
    }
}
