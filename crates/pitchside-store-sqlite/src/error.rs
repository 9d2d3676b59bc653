//! Error type for `pitchside-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] pitchside_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  /// A previous holder of the connection panicked mid-call.
  #[error("connection lock poisoned")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
