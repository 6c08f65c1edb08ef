use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::metrics::Metrics;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn metrics(State(metrics): State<Arc<Metrics>>) -> String {
    metrics.render()
}

#[derive(Serialize)]
pub struct RouteInfo {
    method: &'static str,
    path: &'static str,
}

pub async fn routes() -> axum::Json<Vec<RouteInfo>> {
    axum::Json(vec![
        RouteInfo { method: "GET", path: "/v1/score/ip/{ip}" },
        RouteInfo { method: "GET", path: "/v1/score/email/{email}" },
        RouteInfo { method: "POST", path: "/v1/score/request" },
        RouteInfo { method: "GET", path: "/internal/health" },
        RouteInfo { method: "GET", path: "/internal/metrics" },
        RouteInfo { method: "GET", path: "/internal/routes" },
        RouteInfo { method: "GET", path: "/internal/debug/pprof/{profile}" },
    ])
}

/// Profiling is not wired up in this build; the reference service's
/// pprof endpoints exist for production flame-graph capture, which
/// this deployment has no equivalent tooling for yet.
pub async fn pprof_stub() -> impl IntoResponse {
    (StatusCode::NOT_IMPLEMENTED, "profiling is not available")
}
