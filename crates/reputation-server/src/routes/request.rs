use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reputation_core::RequestQuery;

use crate::error::{AppError, BadRequest};
use crate::json::PrettyJson;
use crate::state::AppState;

pub async fn score_request(
    State(state): State<AppState>,
    Json(query): Json<RequestQuery>,
) -> Result<Response, Response> {
    query
        .validate()
        .map_err(|err| BadRequest::from(err).into_response())?;
    let result = state
        .reputation
        .score_request(&query)
        .await
        .map_err(|err| AppError::from(err).into_response())?;
    Ok(PrettyJson(result).into_response())
}
