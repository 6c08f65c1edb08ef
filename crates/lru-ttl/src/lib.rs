//! A capacity-bounded LRU cache whose entries additionally expire
//! after a per-insertion TTL. Used to hold already-scored responses
//! so that repeated lookups for the same IP, email, or request
//! fingerprint skip the probe fan-out entirely.

use lru_cache::LruCache;
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Item<V> {
    value: V,
    expiration: Instant,
}

pub struct LruCacheWithTtl<K: Hash + Eq, V: Clone> {
    name: String,
    cache: Mutex<LruCache<K, Item<V>>>,
}

impl<K: Hash + Eq, V: Clone> LruCacheWithTtl<K, V> {
    pub fn new_named(name: impl Into<String>, capacity: usize) -> Self {
        let name = name.into();
        tracing::debug!(cache = %name, capacity, "creating lru-ttl cache");
        Self {
            name,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clear(&self) -> usize {
        let mut cache = self.cache.lock();
        let n = cache.len();
        cache.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_with_expiry<Q>(&self, key: &Q) -> Option<(V, Instant)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cache = self.cache.lock();
        let entry = cache.get_mut(key)?;
        if Instant::now() < entry.expiration {
            Some((entry.value.clone(), entry.expiration))
        } else {
            cache.remove(key);
            None
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_with_expiry(key).map(|(value, _)| value)
    }

    pub fn insert(&self, key: K, value: V, ttl: Duration) -> V {
        self.cache.lock().insert(
            key,
            Item {
                value: value.clone(),
                expiration: Instant::now() + ttl,
            },
        );
        value
    }

    /// Returns the cached value for `key` if it is present and not
    /// expired; otherwise calls `func` to compute the value, inserts
    /// it with the given `ttl`, and returns it. The whole operation
    /// holds the cache lock, so concurrent callers never both compute
    /// a fresh value for the same key.
    pub fn get_or_insert_with<F>(&self, key: K, ttl: Duration, func: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut cache = self.cache.lock();
        if let Some(entry) = cache.get_mut(&key) {
            if Instant::now() < entry.expiration {
                return entry.value.clone();
            }
        }
        let value = func();
        cache.insert(
            key,
            Item {
                value: value.clone(),
                expiration: Instant::now() + ttl,
            },
        );
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let cache: LruCacheWithTtl<String, u32> = LruCacheWithTtl::new_named("test", 8);
        cache.insert("a".to_string(), 1, Duration::from_secs(60));
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn expired_entries_are_evicted_on_access() {
        let cache: LruCacheWithTtl<String, u32> = LruCacheWithTtl::new_named("test", 8);
        cache.insert("a".to_string(), 1, Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let cache: LruCacheWithTtl<u32, u32> = LruCacheWithTtl::new_named("test", 2);
        cache.insert(1, 1, Duration::from_secs(60));
        cache.insert(2, 2, Duration::from_secs(60));
        cache.insert(3, 3, Duration::from_secs(60));
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(2));
        assert_eq!(cache.get(&3), Some(3));
    }
}
