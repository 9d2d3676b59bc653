//! Contact-form messages, stored newest first.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Placement, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
  pub id:      i64,
  pub name:    String,
  pub email:   String,
  #[serde(default)]
  pub phone:   String,
  pub message: String,
  /// RFC 3339 timestamp with millisecond precision and a `Z` suffix.
  pub date:    String,
  #[serde(default)]
  pub is_read: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewContactMessage {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub message: String,
}

impl Record for ContactMessage {
  type New = NewContactMessage;

  const PLACEMENT: Placement = Placement::Prepend;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: NewContactMessage, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      name: input.name,
      email: input.email,
      phone: input.phone,
      message: input.message,
      date: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
      is_read: false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_is_iso_millis() {
    let at = DateTime::from_timestamp_millis(1_745_000_000_123).unwrap();
    let m = ContactMessage::assemble(1, NewContactMessage::default(), at);
    assert_eq!(m.date, "2025-04-18T18:13:20.123Z");
    assert!(!m.is_read);
  }
}
