//! Runtime configuration, layered from an optional TOML file and
//! `ROSTER_`-prefixed environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server settings. Every field has a default, so an empty config is valid.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file. A leading `~/` is expanded.
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Read `path` (if it exists), then apply `ROSTER_*` overrides.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("database_path", "roster.db")?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
