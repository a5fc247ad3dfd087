//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`UserService`] over any
//! [`roster_core::store::UserStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{UserService, store::UserStore};

pub use error::ApiError;

/// Build the `/v1/user` routes for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<UserService<S>>) -> Router<()>
where
  S: UserStore + 'static,
  roster_core::Error: From<S::Error>,
{
  Router::new()
    .route(
      "/v1/user",
      get(users::list::<S>)
        .post(users::create::<S>)
        .patch(users::exists::<S>),
    )
    .route("/v1/user/slice", get(users::slice::<S>))
    .route(
      "/v1/user/{id}",
      get(users::get_one::<S>)
        .put(users::update::<S>)
        .delete(users::delete_one::<S>),
    )
    .with_state(service)
}

/// The complete application: [`api_router`] nested under `/api`.
pub fn app<S>(service: Arc<UserService<S>>) -> Router<()>
where
  S: UserStore + 'static,
  roster_core::Error: From<S::Error>,
{
  Router::new().nest("/api", api_router(service))
}

// ─── Integration tests ────────────────────────────────────────────────────────
