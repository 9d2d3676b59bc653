//! The `SlotStore` trait.
//!
//! A slot store is a flat, process-wide key-value space of text values. It is
//! implemented by backends (the in-memory [`MemorySlotStore`] here,
//! `pitchside-store-sqlite` for a file on disk). Everything above it depends
//! on this abstraction, never on a concrete backend.
//!
//! [`MemorySlotStore`]: crate::memory::MemorySlotStore

/// Abstraction over a durable key-value store holding serialised slots.
///
/// Calls are synchronous and each `set` replaces the whole value of a slot.
/// There is no locking, versioning or compare-and-swap: when two handles
/// write the same slot, the later write wins.
pub trait SlotStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the raw text of `key`. Returns `None` if the slot is absent.
  fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Overwrite the slot `key` with `value`, creating it if needed.
  fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

  /// Delete the slot `key`. Removing an absent slot is not an error.
  fn remove(&self, key: &str) -> Result<(), Self::Error>;
}
