use std::path::Path;

use axum::{Router, http, middleware};
use http::header::CONTENT_TYPE;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use uuid::Uuid;

use crate::adapters::{
    self,
    http::{app_state::AppState, middleware::route_guard_middleware},
};

pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let pages = pages_router(&app_state.config.static_dir);

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .merge(adapters::http::routes::health::router())
        .merge(pages)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                        let request_id = Uuid::new_v4();
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_FRAME_OPTIONS,
                    http::HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                ))
                .layer(cors),
        )
}

/// Frontend pages: everything outside `/api` and `/health`, behind the route guard.
fn pages_router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(route_guard_middleware))
}
