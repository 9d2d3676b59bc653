//! [`Collection`] — typed CRUD over one slot.
//!
//! Every mutation reads the whole list, changes it in memory and writes the
//! whole list back. There is no per-record granularity and no coordination
//! between handles: a handle that read the list before another handle wrote
//! it will overwrite that write when it saves.

use std::marker::PhantomData;

use tracing::debug;

use crate::{
  Error, Result,
  clock::Clock,
  codec,
  record::{IdStrategy, Placement, Record},
  store::SlotStore,
};

pub struct Collection<'d, S: ?Sized, R> {
  store:   &'d S,
  clock:   &'d dyn Clock,
  slot:    String,
  _record: PhantomData<fn() -> R>,
}

impl<'d, S, R> Collection<'d, S, R>
where
  S: SlotStore + ?Sized,
  R: Record,
{
  pub fn new(store: &'d S, clock: &'d dyn Clock, slot: impl Into<String>) -> Self {
    Self { store, clock, slot: slot.into(), _record: PhantomData }
  }

  pub fn slot(&self) -> &str { &self.slot }

  /// All records in stored order.
  pub fn list(&self) -> Result<Vec<R>> { codec::load(self.store, &self.slot) }

  /// The first record with `id`, if any.
  pub fn find(&self, id: i64) -> Result<Option<R>> {
    Ok(self.list()?.into_iter().find(|r| r.id() == id))
  }

  /// Mint an id for `input`, place the new record in the list and write the
  /// list back.
  ///
  /// Timestamp ids are not checked against existing records; two creations
  /// within the same millisecond share an id. A sequential id past
  /// `i64::MAX` is [`Error::IdsExhausted`].
  pub fn create(&self, input: R::New) -> Result<R> {
    let mut records = self.list()?;
    let created_at = self.clock.now();

    let id = match R::ID_STRATEGY {
      IdStrategy::Timestamp => created_at.timestamp_millis(),
      IdStrategy::Sequential => match records.iter().map(|r| r.id()).max() {
        None => 1,
        Some(max) => max
          .checked_add(1)
          .ok_or_else(|| Error::IdsExhausted(self.slot.clone()))?,
      },
    };

    let record = R::assemble(id, input, created_at);
    match R::PLACEMENT {
      Placement::Append => records.push(record.clone()),
      Placement::Prepend => records.insert(0, record.clone()),
    }

    codec::save(self.store, &self.slot, &records)?;
    debug!(slot = %self.slot, id, "record created");
    Ok(record)
  }

  /// Replace every record with `id` by `patch(record)`.
  ///
  /// Returns `false`, and writes nothing, when no record has that id.
  pub fn update(&self, id: i64, mut patch: impl FnMut(R) -> R) -> Result<bool> {
    let mut touched = false;
    let records: Vec<R> = self
      .list()?
      .into_iter()
      .map(|r| {
        if r.id() == id {
          touched = true;
          patch(r)
        } else {
          r
        }
      })
      .collect();

    if touched {
      codec::save(self.store, &self.slot, &records)?;
    }
    Ok(touched)
  }

  /// Filter out every record with `id`.
  ///
  /// Returns `false`, and writes nothing, when no record has that id; a second
  /// removal of the same id is therefore a no-op.
  pub fn remove(&self, id: i64) -> Result<bool> {
    let mut records = self.list()?;
    let before = records.len();
    records.retain(|r| r.id() != id);

    if records.len() == before {
      return Ok(false);
    }
    codec::save(self.store, &self.slot, &records)?;
    debug!(slot = %self.slot, id, "record removed");
    Ok(true)
  }

  /// Overwrite the slot with exactly `records`.
  pub fn save(&self, records: &[R]) -> Result<()> {
    codec::save(self.store, &self.slot, records)
  }

  /// Drop the slot entirely, so later reads see it as absent.
  pub fn clear(&self) -> Result<()> {
    self.store.remove(&self.slot).map_err(Error::store)
  }
}
