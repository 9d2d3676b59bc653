//! Entity codec: records to and from the JSON text held in a slot.
//!
//! Reads fail soft. A slot that is absent, or whose text does not decode as a
//! list of the expected record shape, reads as an empty list. Only errors from
//! the store itself reach the caller.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{Error, Result, store::SlotStore};

/// Decode the list in `key`; absent or malformed slots read as empty.
pub fn load<S, R>(store: &S, key: &str) -> Result<Vec<R>>
where
  S: SlotStore + ?Sized,
  R: DeserializeOwned,
{
  Ok(load_present(store, key)?.unwrap_or_default())
}

/// Like [`load`], but distinguishes an absent slot (`None`) from a present
/// one. A present slot that fails to decode is `Some(vec![])`.
pub fn load_present<S, R>(store: &S, key: &str) -> Result<Option<Vec<R>>>
where
  S: SlotStore + ?Sized,
  R: DeserializeOwned,
{
  let Some(raw) = store.get(key).map_err(Error::store)? else {
    return Ok(None);
  };

  match serde_json::from_str(&raw) {
    Ok(records) => Ok(Some(records)),
    Err(e) => {
      warn!(slot = key, error = %e, "slot is not a decodable list, reading as empty");
      Ok(Some(Vec::new()))
    }
  }
}

/// Serialise `records` and overwrite `key` with them in a single write.
pub fn save<S, R>(store: &S, key: &str, records: &[R]) -> Result<()>
where
  S: SlotStore + ?Sized,
  R: Serialize,
{
  let text = serde_json::to_string(records)?;
  store.set(key, &text).map_err(Error::store)?;
  debug!(slot = key, count = records.len(), "slot written");
  Ok(())
}
