//! SQLite backend for the Pitchside directory.
//!
//! Each slot is one row of a single key-value table, so a slot write is a
//! single-row upsert and the whole-list semantics of the collections above
//! are unchanged.

mod schema;
mod store;

pub mod error;

use std::path::Path;

use pitchside_core::{Directory, settings::DirectoryConfig};

pub use error::{Error, Result};
pub use store::SqliteSlotStore;

/// Open the store at the configured path and build a [`Directory`] over it
/// with the configured admin secret.
pub fn open_directory(config: &DirectoryConfig) -> Result<Directory<SqliteSlotStore>> {
  let path = config.resolved_store_path();
  let store = SqliteSlotStore::open(&path)?;
  tracing::info!(path = %path.display(), "slot store opened");
  Ok(Directory::new(store).with_config(config))
}

/// Load configuration from `file` (if present) and the environment, then
/// [`open_directory`].
pub fn load_directory(file: Option<&Path>) -> Result<Directory<SqliteSlotStore>> {
  let config = DirectoryConfig::load(file)?;
  open_directory(&config)
}
