//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids strictly increasing, even across deletes.
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_name   TEXT NOT NULL UNIQUE CHECK (length(user_name)  <= 50),
    first_name  TEXT NOT NULL        CHECK (length(first_name) <= 50),
    last_name   TEXT NOT NULL        CHECK (length(last_name)  <= 50)
);

PRAGMA user_version = 1;
";
