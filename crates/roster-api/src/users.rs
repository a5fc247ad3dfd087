//! Handlers for `/v1/user` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/v1/user/:id` | 404 if not found, 400 if `id` is not an integer |
//! | `POST`   | `/v1/user` | Body: [`CreateUser`]; returns `{"message":"User Created !"}` |
//! | `GET`    | `/v1/user` | All users |
//! | `PUT`    | `/v1/user/:id` | Body: [`UpdateUser`]; returns the updated view |
//! | `DELETE` | `/v1/user/:id` | Returns `{"message":"User deleted !"}` |
//! | `GET`    | `/v1/user/slice` | `?page=<n>&size=<n>`, zero-based |
//! | `PATCH`  | `/v1/user` | `?username=<name>`; returns `true` or `false` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
};
use roster_core::{
  UserService,
  page::{DEFAULT_PAGE_SIZE, PageRequest},
  store::UserStore,
  user::{CreateUser, UpdateUser, UserView},
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extract::UserId};

pub const USER_CREATED: &str = "User Created !";
pub const USER_DELETED: &str = "User deleted !";

/// Plain acknowledgement body.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Message {
  pub message: String,
}

impl Message {
  fn new(message: &str) -> Json<Self> {
    Json(Self {
      message: message.to_owned(),
    })
  }
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /v1/user/:id`
pub async fn get_one<S>(
  State(service): State<Arc<UserService<S>>>,
  UserId(id): UserId,
) -> Result<Json<UserView>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  Ok(Json(service.get_by_id(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /v1/user`
pub async fn create<S>(
  State(service): State<Arc<UserService<S>>>,
  body: Result<Json<CreateUser>, JsonRejection>,
) -> Result<Json<Message>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  let Json(req) = body?;
  service.create(req).await?;
  Ok(Message::new(USER_CREATED))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /v1/user`
pub async fn list<S>(
  State(service): State<Arc<UserService<S>>>,
) -> Result<Json<Vec<UserView>>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  Ok(Json(service.list().await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /v1/user/:id`
pub async fn update<S>(
  State(service): State<Arc<UserService<S>>>,
  UserId(id): UserId,
  body: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<UserView>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  let Json(req) = body?;
  Ok(Json(service.update(id, req).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /v1/user/:id`
pub async fn delete_one<S>(
  State(service): State<Arc<UserService<S>>>,
  UserId(id): UserId,
) -> Result<Json<Message>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  service.delete(id).await?;
  Ok(Message::new(USER_DELETED))
}

// ─── Slice ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SliceParams {
  /// Zero-based page number. Defaults to 0.
  pub page: Option<u32>,
  /// Defaults to 20; zero also means 20.
  pub size: Option<u32>,
}

/// `GET /v1/user/slice[?page=<n>][&size=<n>]`
pub async fn slice<S>(
  State(service): State<Arc<UserService<S>>>,
  params: Result<Query<SliceParams>, QueryRejection>,
) -> Result<Json<Vec<UserView>>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  let Query(params) = params?;
  let page = PageRequest::new(
    params.page.unwrap_or(0),
    params.size.unwrap_or(DEFAULT_PAGE_SIZE),
  );
  Ok(Json(service.slice(page).await?))
}

// ─── Exists ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExistsParams {
  pub username: String,
}

/// `PATCH /v1/user?username=<name>`
pub async fn exists<S>(
  State(service): State<Arc<UserService<S>>>,
  params: Result<Query<ExistsParams>, QueryRejection>,
) -> Result<Json<bool>, ApiError>
where
  S: UserStore,
  roster_core::Error: From<S::Error>,
{
  let Query(params) = params?;
  Ok(Json(service.user_name_exists(&params.username).await?))
}
