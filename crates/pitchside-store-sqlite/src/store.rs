//! [`SqliteSlotStore`] — the SQLite implementation of [`SlotStore`].

use std::{
  path::Path,
  sync::{Arc, Mutex},
};

use chrono::Utc;
use pitchside_core::store::SlotStore;
use rusqlite::{Connection, OptionalExtension as _};
use tracing::trace;

use crate::{Error, Result, schema::SCHEMA};

/// A slot store backed by a single SQLite file.
///
/// Cloning is cheap; clones share one connection, serialised by a mutex.
#[derive(Clone)]
pub struct SqliteSlotStore {
  conn: Arc<Mutex<Connection>>,
}

impl SqliteSlotStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::init(Connection::open(path)?)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> { Self::init(Connection::open_in_memory()?) }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn: Arc::new(Mutex::new(conn)) })
  }

  pub(crate) fn with_conn<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&Connection) -> Result<R>,
  {
    let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
    f(&conn)
  }

  /// Names of all present slots, in lexical order.
  pub fn keys(&self) -> Result<Vec<String>> {
    self.with_conn(|conn| {
      let mut stmt = conn.prepare("SELECT key FROM slots ORDER BY key")?;
      let keys = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
      Ok(keys)
    })
  }
}

impl SlotStore for SqliteSlotStore {
  type Error = Error;

  fn get(&self, key: &str) -> Result<Option<String>> {
    self.with_conn(|conn| {
      Ok(
        conn
          .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| row.get(0))
          .optional()?,
      )
    })
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let updated_at = Utc::now().to_rfc3339();
    self.with_conn(|conn| {
      conn.execute(
        "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
        rusqlite::params![key, value, updated_at],
      )?;
      trace!(slot = key, bytes = value.len(), "slot upserted");
      Ok(())
    })
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.with_conn(|conn| {
      conn.execute("DELETE FROM slots WHERE key = ?1", [key])?;
      Ok(())
    })
  }
}
