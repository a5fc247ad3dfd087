//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::validate::ValidationErrors;
use serde::Serialize;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] roster_core::Error),

  /// A `{id}` path segment that is not an integer.
  #[error("invalid user id: {0:?}")]
  MalformedId(String),

  #[error("bad request: {0}")]
  BadRequest(String),
}

impl From<JsonRejection> for ApiError {
  fn from(e: JsonRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(e: QueryRejection) -> Self { Self::BadRequest(e.body_text()) }
}

/// Error body: `{"message": "..."}`, plus `errors` for validation failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
  message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  errors:  Option<ValidationErrors>,
}

impl ErrorBody {
  fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      errors:  None,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use roster_core::Error as Core;

    let (status, body) = match self {
      ApiError::Core(e @ Core::NotFound(_)) => {
        (StatusCode::NOT_FOUND, ErrorBody::new(e.to_string()))
      }
      ApiError::Core(Core::Validation(errors)) => (StatusCode::BAD_REQUEST, ErrorBody {
        message: errors.to_string(),
        errors:  Some(errors),
      }),
      ApiError::Core(e @ Core::Store(_)) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          ErrorBody::new("internal server error"),
        )
      }
      e @ ApiError::MalformedId(_) => (StatusCode::BAD_REQUEST, ErrorBody::new(e.to_string())),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, ErrorBody::new(m)),
    };
    (status, Json(body)).into_response()
  }
}
