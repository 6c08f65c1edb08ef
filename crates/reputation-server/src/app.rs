//! Router assembly. Middleware is layered outside-in so a request
//! passes: tracing -> body limit -> request id -> rate limit -> metrics
//! -> the matched handler. `tower_http`'s `TimeoutLayer` stands in for
//! the reference service's separate read/write/idle deadlines, since
//! the HTTP stack here only exposes a single end-to-end request
//! timeout rather than per-phase socket deadlines.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::metrics::{record_middleware, Metrics};
use crate::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::routes;
use crate::state::AppState;

pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn build(state: AppState) -> Router {
    let rate_limiter = Arc::new(RateLimiter::default());
    let metrics = Arc::new(Metrics::default());

    let api = Router::new()
        .route("/v1/score/ip/{ip}", get(routes::ip::score_ip))
        .route("/v1/score/email/{email}", get(routes::email::score_email))
        .route("/v1/score/request", post(routes::request::score_request))
        .route_layer(axum::middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ))
        .with_state(state);

    let internal = Router::new()
        .route("/internal/health", get(routes::internal::health))
        .route("/internal/routes", get(routes::internal::routes))
        .route("/internal/metrics", get(routes::internal::metrics))
        .route(
            "/internal/debug/pprof/{profile}",
            get(routes::internal::pprof_stub),
        )
        .with_state(metrics.clone());

    api.merge(internal)
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            record_middleware,
        ))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}
