use std::net::IpAddr;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, BadRequest};
use crate::json::PrettyJson;
use crate::state::AppState;

pub async fn score_ip(
    State(state): State<AppState>,
    Path(raw_ip): Path<String>,
) -> Result<Response, Response> {
    let ip: IpAddr = raw_ip
        .parse()
        .map_err(|_| BadRequest(format!("not a valid IP address: {raw_ip}")).into_response())?;
    let info = state
        .reputation
        .score_ip(ip)
        .await
        .map_err(|err| AppError::from(err).into_response())?;
    Ok(PrettyJson(info).into_response())
}
