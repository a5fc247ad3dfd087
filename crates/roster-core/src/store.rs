//! The `UserStore` trait: the persistence gateway for [`User`] rows.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`UserService`](crate::UserService) depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::{page::PageRequest, user::User};

/// Abstraction over a single `users` table keyed by a generated integer id.
///
/// Every method is one statement; atomicity beyond that is not offered.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve a user by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// All users, ordered by id.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// One page of users, ordered by id.
  fn find_page(
    &self,
    page: PageRequest,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Insert `user` if it has no id, otherwise update its name fields.
  ///
  /// Inserting a duplicate `user_name` must fail rather than overwrite, and
  /// updating an id with no row must fail rather than insert.
  fn save(
    &self,
    user: User,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Delete the row with `id`. Returns `false` if there was none.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Whether a row with exactly this `user_name` exists.
  fn exists_by_user_name<'a>(
    &'a self,
    user_name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Number of stored users.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
