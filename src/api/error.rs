use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// Message returned for every server-side failure; details go to the log.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(DomainError::Validation(msg)) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Domain(_) => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string()),
            Self::Json(
                rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// `Json` extractor whose rejections use the crate's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
