//! Background refresh workers: each dataset gets a detached task that
//! loads immediately, then reloads on a fixed interval for as long as
//! the process runs. A failed load is logged and the worker keeps its
//! schedule; the live dataset it guards is simply left as-is.

use std::future::Future;
use std::time::Duration;

pub const TOR_INTERVAL: Duration = Duration::from_secs(15 * 60);
pub const GEOIP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
pub const IP_LIST_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);
pub const EMAIL_LIST_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Spawns `task` on a fire-immediately-then-interval schedule. The
/// returned handle can be aborted on shutdown; dropping it without
/// aborting leaves the worker running for the remainder of the
/// process, which is fine for a long-lived server.
pub fn run_and_schedule<F, Fut>(interval: Duration, mut task: F) -> tokio::task::JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        loop {
            task().await;
            tokio::time::sleep(interval).await;
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_on_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = run_and_schedule(Duration::from_secs(60), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(60)).await;
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        handle.abort();
    }
}
