use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use reputation_core::EMAIL_ADDRESS;

use crate::error::BadRequest;
use crate::json::PrettyJson;
use crate::state::AppState;

pub async fn score_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Response, Response> {
    if !EMAIL_ADDRESS.is_match(&email) {
        return Err(BadRequest(format!("not a valid email address: {email}")).into_response());
    }
    let info = state.reputation.score_email(&email).await;
    Ok(PrettyJson(info).into_response())
}
