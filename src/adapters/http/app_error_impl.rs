use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => {
                tracing::debug!(error = ?self, "Rejected request");
                StatusCode::BAD_REQUEST
            }
            AppError::StoreUnavailable(_) | AppError::Database(_) | AppError::Internal(_) => {
                // Log the error before it gets converted into a status response.
                tracing::error!(error = ?self, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_resp(status, self.public_message())
    }
}

pub fn error_resp(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
