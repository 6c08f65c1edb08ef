//! Per-input-type response caches. The contract is capacity-only
//! eviction (LRU, no expiry), but the cache primitive this crate
//! shares with everything else is TTL-aware, so these caches pass an
//! effectively-unbounded TTL and rely purely on the capacity bound for
//! eviction.

use std::time::Duration;

use lru_ttl::LruCacheWithTtl;

use crate::email::EmailInfo;
use crate::ip::IpInfo;
use crate::request::RequestResult;

const RESPONSE_CACHE_CAPACITY: usize = 4096;
const NO_EXPIRY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

pub struct ResponseCaches {
    pub ip: LruCacheWithTtl<String, IpInfo>,
    pub email: LruCacheWithTtl<String, EmailInfo>,
    pub request: LruCacheWithTtl<String, RequestResult>,
}

impl Default for ResponseCaches {
    fn default() -> Self {
        Self {
            ip: LruCacheWithTtl::new_named("ip-response-cache", RESPONSE_CACHE_CAPACITY),
            email: LruCacheWithTtl::new_named("email-response-cache", RESPONSE_CACHE_CAPACITY),
            request: LruCacheWithTtl::new_named("request-response-cache", RESPONSE_CACHE_CAPACITY),
        }
    }
}

impl ResponseCaches {
    pub fn ttl(&self) -> Duration {
        NO_EXPIRY
    }
}
