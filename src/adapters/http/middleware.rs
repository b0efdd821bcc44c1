use std::str::FromStr;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::domain::entities::user_type::UserType;

pub const USER_TYPE_COOKIE: &str = "userType";
pub const LOGIN_PATH: &str = "/auth/login";

const PROTECTED_PREFIXES: [&str; 3] = ["/dashboard", "/company", "/candidate"];
const AUTH_PREFIX: &str = "/auth";
const FALLBACK_DASHBOARD: &str = "/dashboard";

#[derive(Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(String),
}

/// Decide where a page request should go given the raw `userType` cookie value.
///
/// The cookie is trusted as-is: there is no token or expiry check here.
pub fn guard_decision(path: &str, user_type: Option<&str>) -> GuardDecision {
    let user_type = user_type.filter(|v| !v.is_empty());

    let protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| has_segment_prefix(path, prefix));
    if protected && user_type.is_none() {
        return GuardDecision::Redirect(LOGIN_PATH.to_string());
    }

    if has_segment_prefix(path, AUTH_PREFIX)
        && let Some(raw) = user_type
    {
        return GuardDecision::Redirect(dashboard_for(raw));
    }

    GuardDecision::Pass
}

/// `/company` matches `/company` and `/company/...` but not `/companyx`.
fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

// Unknown values never end up in the redirect target.
fn dashboard_for(raw: &str) -> String {
    UserType::from_str(raw)
        .map(|t| t.dashboard_path())
        .unwrap_or_else(|_| FALLBACK_DASHBOARD.to_string())
}

pub async fn route_guard_middleware(cookies: CookieJar, request: Request, next: Next) -> Response {
    let user_type = cookies.get(USER_TYPE_COOKIE).map(|c| c.value().to_owned());
    let path = request.uri().path().to_owned();

    match guard_decision(&path, user_type.as_deref()) {
        GuardDecision::Pass => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(
                path = %path,
                user_type = ?user_type,
                target = %target,
                "Route guard redirect"
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
