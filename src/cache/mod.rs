//! Cache Module
//!
//! Time-expiring, concurrency-safe response cache with a background reaper.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::Cache;
