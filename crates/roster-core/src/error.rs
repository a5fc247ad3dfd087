//! Error types for `roster-core`.

use thiserror::Error;

use crate::validate::ValidationErrors;

#[derive(Debug, Error)]
pub enum Error {
  #[error("User not found with id : {0}")]
  NotFound(i64),

  #[error("validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Message reported when an insert collides with an existing user name.
pub const DUPLICATE_USER_NAME: &str = "User name must be unique";

impl Error {
  /// The validation failure a store reports for a duplicate `user_name`.
  pub fn duplicate_user_name() -> Self {
    Self::Validation(ValidationErrors::single("userName", DUPLICATE_USER_NAME))
  }

  /// Wrap any backend failure that has no domain meaning.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl From<ValidationErrors> for Error {
  fn from(errors: ValidationErrors) -> Self { Self::Validation(errors) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
