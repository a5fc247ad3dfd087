//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// An insert hit the `users.user_name` UNIQUE constraint.
  #[error("user name already taken: {0:?}")]
  DuplicateUserName(String),

  /// An update addressed an id with no row.
  #[error("user not found: {0}")]
  UserNotFound(i64),
}

impl From<Error> for roster_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::DuplicateUserName(_) => Self::duplicate_user_name(),
      Error::UserNotFound(id) => Self::NotFound(id),
      Error::Database(e) => Self::store(e),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Whether `e` is a violation of a UNIQUE constraint.
pub(crate) fn is_unique_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}
