//! Key-value cache with sliding expiry.
//!
//! Each entry remembers when it was last accessed. An entry is alive while
//! `now - last_access <= ttl`; a successful [`ExpiringCache::get`] refreshes
//! `last_access`, so entries that keep being used never expire. Dead entries
//! are dropped lazily on access and eagerly by [`ExpiringCache::evict_expired`].

use std::{collections::HashMap, hash::Hash, sync::Arc, time::Duration};

use mitsumori_shared::time::Clock;
use tokio::sync::Mutex;

struct Entry<V> {
    value: V,
    last_access: i64,
}

/// Cache with sliding TTL driven by an injected [`Clock`].
pub struct ExpiringCache<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    ttl_millis: i64,
    clock: Arc<dyn Clock>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_millis: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
            clock,
        }
    }

    fn is_expired(&self, last_access: i64, now: i64) -> bool {
        now.saturating_sub(last_access) > self.ttl_millis
    }

    /// Insert or replace an entry; its window starts now.
    pub async fn insert(&self, key: K, value: V) {
        let now = self.clock.now_millis();
        self.entries.lock().await.insert(
            key,
            Entry {
                value,
                last_access: now,
            },
        );
    }

    /// Look up a live entry and slide its window.
    ///
    /// An expired entry is removed and reported as absent.
    pub async fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now_millis();
        let mut entries = self.entries.lock().await;

        let entry = entries.get_mut(key)?;
        if !self.is_expired(entry.last_access, now) {
            entry.last_access = now;
            return Some(entry.value.clone());
        }

        entries.remove(key);
        None
    }

    /// Remove an entry and return its value, expired or not.
    pub async fn remove(&self, key: &K) -> Option<V> {
        self.entries.lock().await.remove(key).map(|entry| entry.value)
    }

    /// Drop every expired entry and return how many were removed.
    pub async fn evict_expired(&self) -> usize {
        let now = self.clock.now_millis();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry.last_access, now));
        before - entries.len()
    }
}
