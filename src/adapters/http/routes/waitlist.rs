//! Waitlist intake.

use std::sync::Arc;

use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, response::IntoResponse,
    routing::post,
};
use serde::Serialize;

use super::{json_body, string_field};
use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::{SubmissionOutcome, WaitlistUseCases},
};

#[derive(Serialize, Debug)]
struct WaitlistResponse {
    message: &'static str,
    email: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(submit))
}

/// POST /api/waitlist
/// Body: `{ "email": "..." }`. Duplicates are answered with 200, not an error.
async fn submit(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload = json_body(&body)?;
    let email = string_field(&payload, "email")
        .ok_or_else(|| AppError::InvalidInput("Email is required".into()))?;

    let response = match waitlist.submit(email).await? {
        SubmissionOutcome::Added(entry) => WaitlistResponse {
            message: "Successfully added to waitlist",
            email: entry.email,
        },
        SubmissionOutcome::AlreadyListed { email } => WaitlistResponse {
            message: "You are already on the waitlist!",
            email,
        },
        SubmissionOutcome::AcceptedUnpersisted { email } => WaitlistResponse {
            message: "Email received (stored locally)",
            email,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}
