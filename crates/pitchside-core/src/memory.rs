//! [`MemorySlotStore`] — an in-process [`SlotStore`].
//!
//! The equivalent of a browser's local storage: a single map of slot names to
//! text, shared by every handle that holds the same `Arc`.

use std::{collections::BTreeMap, convert::Infallible, sync::RwLock};

use crate::store::SlotStore;

#[derive(Debug, Default)]
pub struct MemorySlotStore {
  slots: RwLock<BTreeMap<String, String>>,
}

impl MemorySlotStore {
  pub fn new() -> Self { Self::default() }

  /// Names of all present slots, in lexical order.
  pub fn keys(&self) -> Vec<String> {
    self
      .slots
      .read()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .keys()
      .cloned()
      .collect()
  }
}

impl SlotStore for MemorySlotStore {
  type Error = Infallible;

  fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    let slots = self.slots.read().unwrap_or_else(|p| p.into_inner());
    Ok(slots.get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), Infallible> {
    let mut slots = self.slots.write().unwrap_or_else(|p| p.into_inner());
    slots.insert(key.to_owned(), value.to_owned());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), Infallible> {
    let mut slots = self.slots.write().unwrap_or_else(|p| p.into_inner());
    slots.remove(key);
    Ok(())
  }
}
