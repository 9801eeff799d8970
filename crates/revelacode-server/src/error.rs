//! Mapping from service failures to HTTP responses.
//!
//! Every failure body is `{ "message": ... }`. Internal detail is logged,
//! never returned.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use revelacode_core::Error;

#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short client-facing message.
    pub fn message(&self) -> String {
        match &self.0 {
            Error::Validation(msg) | Error::NotFound(msg) => msg.clone(),
            Error::Unauthorized(_) => "Unauthorized".into(),
            Error::ExternalFetch(_) => "External verse fetch failed".into(),
            Error::InvalidConfiguration(_) => "Invalid verse config".into(),
            _ => "Server error".into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(Error::Validation(format!(
            "Invalid query string: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(serde_json::json!({ "message": self.message() }))).into_response()
    }
}
