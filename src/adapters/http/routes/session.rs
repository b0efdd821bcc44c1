use std::str::FromStr;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

use super::{json_body, string_field};
use crate::{
    adapters::http::{app_state::AppState, middleware::USER_TYPE_COOKIE},
    app_error::{AppError, AppResult},
    domain::entities::user_type::UserType,
};

#[derive(Serialize)]
struct SessionResponse {
    redirect: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/session", post(create_session).delete(clear_session))
}

/// POST /api/session
/// Sets the `userType` cookie read by the route guard. No credentials are checked.
async fn create_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload = json_body(&body)?;
    let raw = string_field(&payload, "userType")
        .ok_or_else(|| AppError::InvalidInput("User type is required".into()))?;
    let user_type = UserType::from_str(raw.trim())
        .map_err(|_| AppError::InvalidInput("Unknown user type".into()))?;

    // Not http_only: the frontend reads it to pick the dashboard.
    let cookie = Cookie::build((USER_TYPE_COOKIE, user_type.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(app_state.config.session_cookie_ttl_days))
        .build();

    Ok((
        StatusCode::OK,
        jar.add(cookie),
        Json(SessionResponse {
            redirect: user_type.dashboard_path(),
        }),
    ))
}

/// DELETE /api/session
async fn clear_session(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(USER_TYPE_COOKIE).path("/"));
    (StatusCode::NO_CONTENT, jar)
}
