//! Error types for `pitchside-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The underlying [`SlotStore`](crate::store::SlotStore) failed to read or
  /// write a slot.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("match not found: {0}")]
  MatchNotFound(i64),

  /// A sequential id cannot be minted because the slot already holds
  /// `i64::MAX`.
  #[error("no sequential id left in slot {0}")]
  IdsExhausted(String),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
