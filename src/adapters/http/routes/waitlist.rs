use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, routes::user_language},
    app_error::AppResult,
    domain::entities::submission_status::SubmissionStatus,
    use_cases::waitlist::SubmitOutcome,
};

#[derive(Deserialize)]
struct JoinPayload {
    email: String,
}

#[derive(Serialize)]
struct JoinResponse {
    status: SubmissionStatus,
    outcome: SubmitOutcome,
    message: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(join_waitlist))
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let lang = user_language(&headers);
    let outcome = app_state.waitlist_use_cases.submit(&payload.email).await?;

    let status_code = match outcome {
        SubmitOutcome::Registered => StatusCode::CREATED,
        SubmitOutcome::AlreadyRegistered => StatusCode::CONFLICT,
        SubmitOutcome::Failed => StatusCode::SERVICE_UNAVAILABLE,
    };

    Ok((
        status_code,
        Json(JoinResponse {
            status: outcome.status(),
            outcome,
            message: outcome.message(lang),
        }),
    ))
}
