// In-memory profile cache.
// Holds the last successfully assembled profile per username for stale fallback.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::profile::Profile;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Last-known-good profiles keyed by the username as requested.
///
/// Entries are never expired; a key is only written after a full successful
/// fetch. Cloning the cache shares the same map.
#[derive(Debug, Clone, Default)]
pub struct ProfileCache {
    entries: Arc<DashMap<String, CachedData<Profile>>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `profile` under `username`, replacing any previous entry.
    pub fn put(&self, username: &str, profile: Profile) {
        self.entries
            .insert(username.to_string(), CachedData::new(profile));
    }

    /// Copy of the entry for `username`, if one was ever stored.
    pub fn get(&self, username: &str) -> Option<CachedData<Profile>> {
        self.entries.get(username).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
