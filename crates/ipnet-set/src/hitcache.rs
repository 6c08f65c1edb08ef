//! Short-TTL positive-hit cache. Only hits are cached: a miss would
//! need to be invalidated the moment the backing set is republished,
//! and negatives for IPs that are never queried again are not worth
//! the bookkeeping.
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

pub struct HitCache {
    ttl: Duration,
    entries: Mutex<HashMap<IpAddr, Instant>>,
}

impl HitCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, ip: &IpAddr) -> bool {
        let mut entries = self.entries.lock();
        match entries.get(ip) {
            Some(expires) if Instant::now() < *expires => true,
            Some(_) => {
                entries.remove(ip);
                false
            }
            None => false,
        }
    }

    pub fn record_hit(&self, ip: IpAddr) {
        self.entries.lock().insert(ip, Instant::now() + self.ttl);
    }

    /// Flushed whenever the backing set is republished, so that a
    /// cached positive from the old epoch cannot leak into the new one.
    pub fn flush(&self) {
        self.entries.lock().clear();
    }
}
