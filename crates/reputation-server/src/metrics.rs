//! A minimal counter set exposed at `/internal/metrics` in Prometheus
//! text format. Kept deliberately small: request count and per-status
//! tallies, enough for a liveness dashboard without pulling in a full
//! metrics-registry dependency the rest of the stack has no other use
//! for.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    requests_total: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
}

impl Metrics {
    pub fn record(&self, status: axum::http::StatusCode) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if status.is_client_error() {
            self.responses_4xx.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            self.responses_5xx.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn render(&self) -> String {
        format!(
            "# HELP reputation_requests_total Total HTTP requests served.\n\
             # TYPE reputation_requests_total counter\n\
             reputation_requests_total {}\n\
             # HELP reputation_responses_4xx_total Responses with a 4xx status.\n\
             # TYPE reputation_responses_4xx_total counter\n\
             reputation_responses_4xx_total {}\n\
             # HELP reputation_responses_5xx_total Responses with a 5xx status.\n\
             # TYPE reputation_responses_5xx_total counter\n\
             reputation_responses_5xx_total {}\n",
            self.requests_total.load(Ordering::Relaxed),
            self.responses_4xx.load(Ordering::Relaxed),
            self.responses_5xx.load(Ordering::Relaxed),
        )
    }
}

pub async fn record_middleware(
    axum::extract::State(metrics): axum::extract::State<std::sync::Arc<Metrics>>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let response = next.run(req).await;
    metrics.record(response.status());
    response
}
