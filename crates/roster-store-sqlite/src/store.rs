//! [`SqliteStore`], the SQLite implementation of [`UserStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{page::PageRequest, store::UserStore, user::User};

use crate::{Error, Result, error::is_unique_violation, schema::SCHEMA};

const SELECT_USER: &str = "SELECT id, user_name, first_name, last_name FROM users";

/// Column order shared by every query that yields a [`User`].
fn read_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:         Some(row.get(0)?),
    user_name:  row.get(1)?,
    first_name: row.get(2)?,
    last_name:  row.get(3)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster user store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert(&self, user: User) -> Result<User> {
    let user_name = user.user_name.clone();

    let inserted = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO users (user_name, first_name, last_name)
           VALUES (?1, ?2, ?3)
           RETURNING id, user_name, first_name, last_name",
          rusqlite::params![user.user_name, user.first_name, user.last_name],
          read_user,
        )?)
      })
      .await;

    match inserted {
      Ok(user) => Ok(user),
      Err(e) if is_unique_violation(&e) => Err(Error::DuplicateUserName(user_name)),
      Err(e) => Err(e.into()),
    }
  }

  /// Only the name columns are written; `user_name` is immutable here.
  async fn update(&self, id: i64, user: User) -> Result<User> {
    let updated: Option<User> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "UPDATE users SET first_name = ?2, last_name = ?3
               WHERE id = ?1
               RETURNING id, user_name, first_name, last_name",
              rusqlite::params![id, user.first_name, user.last_name],
              read_user,
            )
            .optional()?,
        )
      })
      .await?;

    updated.ok_or(Error::UserNotFound(id))
  }
}

// ─── UserStore impl ──────────────────────────────────────────────────────────

impl UserStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
    let user = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_USER} WHERE id = ?1"),
              rusqlite::params![id],
              read_user,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(user)
  }

  async fn find_all(&self) -> Result<Vec<User>> {
    let users = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_USER} ORDER BY id"))?;
        let rows = stmt
          .query_map([], read_user)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(users)
  }

  async fn find_page(&self, page: PageRequest) -> Result<Vec<User>> {
    let limit = i64::from(page.size());
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

    let users = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("{SELECT_USER} ORDER BY id LIMIT ?1 OFFSET ?2"))?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], read_user)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(users)
  }

  async fn save(&self, user: User) -> Result<User> {
    match user.id {
      None => self.insert(user).await,
      Some(id) => self.update(id, user).await,
    }
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM users WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn exists_by_user_name<'a>(&'a self, user_name: &'a str) -> Result<bool> {
    let user_name = user_name.to_owned();

    let exists = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT EXISTS (SELECT 1 FROM users WHERE user_name = ?1)",
          rusqlite::params![user_name],
          |row| row.get::<_, bool>(0),
        )?)
      })
      .await?;
    Ok(exists)
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
      })
      .await?;
    Ok(u64::try_from(n).unwrap_or_default())
  }
}
