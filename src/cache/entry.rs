//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response body with its insertion timestamp.
///
/// `created_at` is set once at insertion and never mutated; a read does not
/// refresh it ("get" is not "touch").
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was inserted
    pub created_at: Instant,
    /// The cached response body
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is considered expired when the elapsed
    /// time since insertion is greater than or equal to the TTL, so the entry
    /// becomes eligible for removal the moment the TTL has fully elapsed.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_is_not_expired() {
        let entry = CacheEntry::new(b"body".to_vec());

        assert_eq!(entry.value, b"body");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new(b"body".to_vec());

        sleep(Duration::from_millis(30));

        assert!(entry.is_expired(Duration::from_millis(20)));
    }

    #[test]
    fn test_entry_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new(Vec::new());

        assert!(entry.is_expired(Duration::ZERO));
    }
}
