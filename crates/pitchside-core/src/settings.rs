//! Directory configuration.
//!
//! Layered the same way as the rest of the tooling: an optional TOML file,
//! then `PITCHSIDE_*` environment variables on top.
//!
//! ```toml
//! store_path     = "~/.local/share/pitchside/pitchside.db"
//! admin_password = "admin123"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The admin secret used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
  /// Where a durable backend keeps its slots. A leading `~/` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path:     PathBuf,
  /// Compared verbatim by the session gate. Not a credential in any real
  /// sense; see [`crate::session`].
  #[serde(default = "default_admin_password")]
  pub admin_password: String,
}

fn default_store_path() -> PathBuf { PathBuf::from("pitchside.db") }

fn default_admin_password() -> String { DEFAULT_ADMIN_PASSWORD.to_owned() }

impl Default for DirectoryConfig {
  fn default() -> Self {
    Self {
      store_path:     default_store_path(),
      admin_password: default_admin_password(),
    }
  }
}

impl DirectoryConfig {
  /// Read `file` (if given and present) and overlay `PITCHSIDE_*` variables.
  pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(file) = file {
      builder = builder.add_source(config::File::from(file.to_path_buf()).required(false));
    }
    builder
      .add_source(config::Environment::with_prefix("PITCHSIDE"))
      .build()?
      .try_deserialize()
  }

  /// `store_path` with a leading `~/` expanded to `$HOME`.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_toml_file() {
    let path = std::env::temp_dir().join(format!("pitchside-config-{}.toml", std::process::id()));
    std::fs::write(&path, "store_path = \"/var/lib/pitchside.db\"\nadmin_password = \"letmein\"\n")
      .unwrap();

    let cfg = DirectoryConfig::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/pitchside.db"));
    assert_eq!(cfg.admin_password, "letmein");
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = DirectoryConfig::load(Some(Path::new("/nonexistent/pitchside.toml"))).unwrap();
    // Environment may override in CI; only the types are pinned here.
    assert!(!cfg.admin_password.is_empty());
    assert!(!cfg.store_path.as_os_str().is_empty());
  }

  #[test]
  fn relative_paths_are_left_alone() {
    let cfg = DirectoryConfig { store_path: "data/slots.db".into(), ..Default::default() };
    assert_eq!(cfg.resolved_store_path(), PathBuf::from("data/slots.db"));
  }
}
