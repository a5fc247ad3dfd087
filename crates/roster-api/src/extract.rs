//! Custom extractors.

use axum::{
  extract::{FromRequestParts, Path},
  http::request::Parts,
};

use crate::error::ApiError;

/// The integer `{id}` path parameter. Anything else is rejected with
/// [`ApiError::MalformedId`] before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    raw.parse().map(UserId).map_err(|_| ApiError::MalformedId(raw))
  }
}
