//! The [`Record`] trait binding each entity to how it is created.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// How [`Collection::create`](crate::collection::Collection::create) mints a
/// new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
  /// Milliseconds since the epoch, read from the injected clock. Used for
  /// top-level entities so ids are not reused across sessions.
  Timestamp,
  /// `max(existing ids) + 1`, starting at 1. Used for sub-collections that
  /// are filled rapidly in one sitting, where two creations could land in
  /// the same millisecond.
  Sequential,
}

/// Where a newly created record lands in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
  Append,
  /// Newest first.
  Prepend,
}

/// An entity stored as one element of a slot's list.
pub trait Record: Serialize + DeserializeOwned + Clone {
  /// Field values supplied by the caller; everything except the id and any
  /// store-assigned fields.
  type New;

  const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;
  const PLACEMENT: Placement = Placement::Append;

  fn id(&self) -> i64;

  /// Build the stored record from its input, the minted id and the creation
  /// time.
  fn assemble(id: i64, input: Self::New, created_at: DateTime<Utc>) -> Self;
}
