//! The user record, its external view, and the request bodies that create
//! and modify it.

use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationErrors};

/// A stored user row.
///
/// `id` is `None` until the row has been saved; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub id:         Option<i64>,
  pub user_name:  String,
  pub first_name: String,
  pub last_name:  String,
}

impl User {
  /// An unsaved user built from a create request.
  pub fn new(req: CreateUser) -> Self {
    Self {
      id:         None,
      user_name:  req.user_name,
      first_name: req.first_name,
      last_name:  req.last_name,
    }
  }

  /// Overwrite the mutable name fields. `id` and `user_name` are untouched.
  pub fn apply(&mut self, req: UpdateUser) {
    self.first_name = req.first_name;
    self.last_name = req.last_name;
  }
}

/// The externally visible projection of a [`User`]. The user name is never
/// exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
  pub id:         Option<i64>,
  pub first_name: String,
  pub last_name:  String,
}

impl UserView {
  pub fn of(user: &User) -> Self {
    Self {
      id:         user.id,
      first_name: user.first_name.clone(),
      last_name:  user.last_name.clone(),
    }
  }
}

impl From<&User> for UserView {
  fn from(user: &User) -> Self { Self::of(user) }
}

impl From<User> for UserView {
  fn from(user: User) -> Self {
    Self {
      id:         user.id,
      first_name: user.first_name,
      last_name:  user.last_name,
    }
  }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
  pub user_name:  String,
  pub first_name: String,
  pub last_name:  String,
}

impl CreateUser {
  pub fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::name(&mut errors, "userName", &self.user_name);
    validate::name(&mut errors, "firstName", &self.first_name);
    validate::name(&mut errors, "lastName", &self.last_name);
    errors.into_result()
  }
}

/// Body of `PUT /user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
  pub first_name: String,
  pub last_name:  String,
}

impl UpdateUser {
  pub fn validate(&self) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::name(&mut errors, "firstName", &self.first_name);
    validate::name(&mut errors, "lastName", &self.last_name);
    errors.into_result()
  }
}
