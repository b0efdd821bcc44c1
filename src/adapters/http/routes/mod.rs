pub mod health;
pub mod session;
pub mod waitlist;

use axum::{Router, body::Bytes};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

/// Routes mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .merge(session::router())
}

/// Parse a JSON body regardless of content-type, so bad input lands on a 400.
pub(crate) fn json_body(body: &Bytes) -> AppResult<serde_json::Value> {
    serde_json::from_slice(body).map_err(|_| AppError::InvalidInput("Invalid request body".into()))
}

/// Non-empty string field of a JSON object body.
pub(crate) fn string_field<'a>(payload: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(serde_json::Value::as_str)
        .filter(|value| !value.is_empty())
}
