use crate::models::ProfileRecord;
use std::time::Duration;

/// Session-local profile cache
///
/// Keeps recently opened profiles in memory so returning to one within the
/// TTL skips the round trip to the directory API. Entries are evicted by
/// capacity and by time-to-live.
pub struct ProfileCache {
    entries: moka::future::Cache<u64, ProfileRecord>,
}

impl ProfileCache {
    /// Create a new profile cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a cached profile by id
    pub async fn get(&self, id: u64) -> Option<ProfileRecord> {
        let record = self.entries.get(&id).await;
        match record {
            Some(_) => tracing::trace!("Profile cache hit: {}", id),
            None => tracing::trace!("Profile cache miss: {}", id),
        }
        record
    }

    /// Store a freshly fetched profile
    pub async fn insert(&self, record: ProfileRecord) {
        tracing::trace!("Profile cache set: {}", record.id);
        self.entries.insert(record.id, record).await;
    }

    /// Number of cached profiles
    pub async fn entry_count(&self) -> u64 {
        // Flush pending maintenance so the count reflects recent inserts
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}
