//! [`UserService`]: one gateway round-trip per operation, plus the
//! not-found contract and the mapping to [`UserView`].

use tracing::debug;

use crate::{
  Error, Result,
  page::PageRequest,
  store::UserStore,
  user::{CreateUser, UpdateUser, User, UserView},
};

/// Orchestrates a [`UserStore`]. The store is injected at construction.
#[derive(Debug, Clone)]
pub struct UserService<S> {
  store: S,
}

impl<S> UserService<S>
where
  S: UserStore,
  Error: From<S::Error>,
{
  pub fn new(store: S) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  async fn fetch(&self, id: i64) -> Result<User> {
    self.store.find_by_id(id).await?.ok_or(Error::NotFound(id))
  }

  pub async fn get_by_id(&self, id: i64) -> Result<UserView> {
    Ok(UserView::from(self.fetch(id).await?))
  }

  /// Every user, in store order.
  pub async fn list(&self) -> Result<Vec<UserView>> {
    let users = self.store.find_all().await?;
    Ok(users.into_iter().map(UserView::from).collect())
  }

  /// Persist a new user.
  ///
  /// There is no existence pre-check: a duplicate `user_name` is rejected by
  /// the store's unique constraint and reported as a validation failure.
  pub async fn create(&self, req: CreateUser) -> Result<UserView> {
    req.validate()?;
    let user = self.store.save(User::new(req)).await?;
    debug!(id = ?user.id, "created user");
    Ok(UserView::from(user))
  }

  /// Replace the first and last name of an existing user.
  /// An absent id is reported before the body is validated.
  pub async fn update(&self, id: i64, req: UpdateUser) -> Result<UserView> {
    let mut user = self.fetch(id).await?;
    req.validate()?;
    user.apply(req);
    let user = self.store.save(user).await?;
    debug!(id, "updated user");
    Ok(UserView::from(user))
  }

  /// Delete an existing user. A row that disappears between the lookup and
  /// the delete is still reported as not found.
  pub async fn delete(&self, id: i64) -> Result<()> {
    let user = self.fetch(id).await?;
    let id = user.id.unwrap_or(id);
    if !self.store.delete_by_id(id).await? {
      return Err(Error::NotFound(id));
    }
    debug!(id, "deleted user");
    Ok(())
  }

  pub async fn slice(&self, page: PageRequest) -> Result<Vec<UserView>> {
    let users = self.store.find_page(page).await?;
    debug!(page = page.page(), size = page.size(), rows = users.len(), "sliced users");
    Ok(users.into_iter().map(UserView::from).collect())
  }

  pub async fn user_name_exists(&self, user_name: &str) -> Result<bool> {
    Ok(self.store.exists_by_user_name(user_name).await?)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;

  // ─── In-memory store ──────────────────────────────────────────────────────

  #[derive(Debug, thiserror::Error)]
  enum MemError {
    #[error("duplicate user name")]
    Duplicate,
    #[error("no row {0}")]
    Missing(i64),
  }

  impl From<MemError> for Error {
    fn from(e: MemError) -> Self {
      match e {
        MemError::Duplicate => Error::duplicate_user_name(),
        MemError::Missing(id) => Error::NotFound(id),
      }
    }
  }

  #[derive(Default)]
  struct MemStore {
    rows:    Mutex<Vec<User>>,
    next_id: Mutex<i64>,
  }

  impl UserStore for MemStore {
    type Error = MemError;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MemError> {
      let rows = self.rows.lock().unwrap();
      Ok(rows.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, MemError> {
      Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<User>, MemError> {
      let rows = self.rows.lock().unwrap();
      Ok(
        rows
          .iter()
          .skip(page.offset() as usize)
          .take(page.size() as usize)
          .cloned()
          .collect(),
      )
    }

    async fn save(&self, mut user: User) -> Result<User, MemError> {
      let mut rows = self.rows.lock().unwrap();
      match user.id {
        None => {
          if rows.iter().any(|u| u.user_name == user.user_name) {
            return Err(MemError::Duplicate);
          }
          let mut next = self.next_id.lock().unwrap();
          *next += 1;
          user.id = Some(*next);
          rows.push(user.clone());
        }
        Some(id) => {
          let row = rows
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or(MemError::Missing(id))?;
          row.first_name = user.first_name.clone();
          row.last_name = user.last_name.clone();
        }
      }
      Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, MemError> {
      let mut rows = self.rows.lock().unwrap();
      let before = rows.len();
      rows.retain(|u| u.id != Some(id));
      Ok(rows.len() != before)
    }

    async fn exists_by_user_name<'a>(
      &'a self,
      user_name: &'a str,
    ) -> Result<bool, MemError> {
      let rows = self.rows.lock().unwrap();
      Ok(rows.iter().any(|u| u.user_name == user_name))
    }

    async fn count(&self) -> Result<u64, MemError> {
      Ok(self.rows.lock().unwrap().len() as u64)
    }
  }

  fn service() -> UserService<MemStore> { UserService::new(MemStore::default()) }

  fn create_req(user_name: &str) -> CreateUser {
    CreateUser {
      user_name:  user_name.into(),
      first_name: format!("{user_name}-first"),
      last_name:  format!("{user_name}-last"),
    }
  }

  // ─── Reads ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_then_get_returns_same_view() {
    let svc = service();
    let created = svc.create(create_req("sami")).await.unwrap();
    assert!(created.id.unwrap() > 0);

    let fetched = svc.get_by_id(created.id.unwrap()).await.unwrap();
    assert_eq!(fetched, created);
  }

  #[tokio::test]
  async fn get_missing_is_not_found_with_id_in_message() {
    let err = service().get_by_id(-1).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(-1)));
    assert_eq!(err.to_string(), "User not found with id : -1");
  }

  #[tokio::test]
  async fn list_preserves_store_order() {
    let svc = service();
    for name in ["a", "b", "c"] {
      svc.create(create_req(name)).await.unwrap();
    }

    let names: Vec<_> = svc
      .list()
      .await
      .unwrap()
      .into_iter()
      .map(|v| v.first_name)
      .collect();
    assert_eq!(names, ["a-first", "b-first", "c-first"]);
  }

  #[tokio::test]
  async fn pages_reconstruct_list() {
    let svc = service();
    for i in 0..7 {
      svc.create(create_req(&format!("user{i}"))).await.unwrap();
    }

    let mut paged = Vec::new();
    for page in 0..4 {
      let slice = svc.slice(PageRequest::new(page, 3)).await.unwrap();
      assert!(slice.len() <= 3);
      paged.extend(slice);
    }
    assert_eq!(paged, svc.list().await.unwrap());
  }

  // ─── Writes ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_rejects_invalid_request_without_touching_store() {
    let svc = service();
    let err = svc
      .create(CreateUser {
        user_name:  String::new(),
        first_name: "x".into(),
        last_name:  "y".into(),
      })
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(svc.store().count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn duplicate_user_name_is_a_validation_failure() {
    let svc = service();
    svc.create(create_req("sami")).await.unwrap();

    match svc.create(create_req("sami")).await.unwrap_err() {
      Error::Validation(errors) => {
        let e = errors.iter().next().unwrap();
        assert_eq!(e.field, "userName");
        assert_eq!(e.message, crate::error::DUPLICATE_USER_NAME);
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[tokio::test]
  async fn update_overwrites_names_and_keeps_id() {
    let svc = service();
    let created = svc.create(create_req("sami")).await.unwrap();
    let id = created.id.unwrap();

    let updated = svc
      .update(id, UpdateUser {
        first_name: "A".into(),
        last_name:  "B".into(),
      })
      .await
      .unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.first_name, "A");
    assert_eq!(updated.last_name, "B");
    assert_eq!(svc.get_by_id(id).await.unwrap(), updated);
    assert!(svc.user_name_exists("sami").await.unwrap());
  }

  #[tokio::test]
  async fn update_missing_is_not_found() {
    let err = service()
      .update(42, UpdateUser {
        first_name: "A".into(),
        last_name:  "B".into(),
      })
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotFound(42)));
  }

  #[tokio::test]
  async fn update_with_blank_name_leaves_row_unchanged() {
    let svc = service();
    let created = svc.create(create_req("sami")).await.unwrap();
    let id = created.id.unwrap();

    let err = svc
      .update(id, UpdateUser {
        first_name: " ".into(),
        last_name:  "x".repeat(51),
      })
      .await
      .unwrap_err();
    match err {
      Error::Validation(errors) => {
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["firstName", "lastName"]);
      }
      other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(svc.get_by_id(id).await.unwrap(), created);
  }

  #[tokio::test]
  async fn update_missing_with_invalid_body_is_not_found() {
    let err = service()
      .update(-1, UpdateUser {
        first_name: String::new(),
        last_name:  "B".into(),
      })
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotFound(-1)));
  }

  #[tokio::test]
  async fn delete_then_get_is_not_found() {
    let svc = service();
    let id = svc.create(create_req("sami")).await.unwrap().id.unwrap();

    svc.delete(id).await.unwrap();
    assert!(matches!(svc.get_by_id(id).await, Err(Error::NotFound(i)) if i == id));
    assert!(matches!(svc.delete(id).await, Err(Error::NotFound(i)) if i == id));
    assert!(!svc.user_name_exists("sami").await.unwrap());
  }
}
