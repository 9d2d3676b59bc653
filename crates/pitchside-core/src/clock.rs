//! Injectable time source.
//!
//! Timestamp-derived ids and contact-message dates both read the clock, so
//! tests swap in a [`ManualClock`] to get deterministic values.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A clock that only moves when told to.
///
/// Holds milliseconds since the Unix epoch. With `auto_step` set, every read
/// advances the clock by that many milliseconds after returning.
#[derive(Debug)]
pub struct ManualClock {
  millis:    AtomicI64,
  auto_step: i64,
}

impl ManualClock {
  pub fn at(start: DateTime<Utc>) -> Self {
    Self { millis: AtomicI64::new(start.timestamp_millis()), auto_step: 0 }
  }

  /// A clock starting at `start_millis` that ticks `step` ms per read.
  pub fn stepping(start_millis: i64, step: i64) -> Self {
    Self { millis: AtomicI64::new(start_millis), auto_step: step }
  }

  pub fn advance_millis(&self, delta: i64) {
    self.millis.fetch_add(delta, Ordering::SeqCst);
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    let millis = self.millis.fetch_add(self.auto_step, Ordering::SeqCst);
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
  }
}
