//! 24/7 channels and their per-channel stream lists.
//!
//! A channel's `slug` names the slot holding its streams
//! (`channel_{slug}_streams`). Renaming a channel's slug strands the old slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  record::{IdStrategy, Record},
  slug,
};

pub const DEFAULT_LOGO: &str = "📺";

// ─── Channel ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
  pub id:       i64,
  pub name:     String,
  /// An emoji glyph shown when there is no `logo_url`.
  #[serde(default)]
  pub logo:     String,
  pub slug:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewChannel {
  pub name:     String,
  /// Falls back to [`DEFAULT_LOGO`] when empty.
  pub logo:     String,
  /// Derived from `name` when `None` or empty.
  pub slug:     Option<String>,
  pub logo_url: Option<String>,
}

impl NewChannel {
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: name.into(), ..Self::default() }
  }
}

impl Record for Channel {
  type New = NewChannel;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: NewChannel, _created_at: DateTime<Utc>) -> Self {
    let slug = input
      .slug
      .filter(|s| !s.is_empty())
      .unwrap_or_else(|| slug::derive_channel_slug(&input.name));
    let logo = if input.logo.is_empty() {
      DEFAULT_LOGO.to_owned()
    } else {
      input.logo
    };
    Self {
      id,
      name: input.name,
      logo,
      slug,
      logo_url: input.logo_url.filter(|u| !u.is_empty()),
    }
  }
}

// ─── ChannelStream ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStream {
  pub id:       i64,
  pub name:     String,
  #[serde(default)]
  pub language: String,
  #[serde(default)]
  pub quality:  String,
  pub url:      String,
}

#[derive(Debug, Clone)]
pub struct NewChannelStream {
  pub name:     String,
  pub language: String,
  pub quality:  String,
  pub url:      String,
}

impl NewChannelStream {
  /// An English HD stream, the admin form's defaults.
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      name:     name.into(),
      language: "English".into(),
      quality:  "HD".into(),
      url:      url.into(),
    }
  }
}

impl Record for ChannelStream {
  type New = NewChannelStream;

  const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: NewChannelStream, _created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      name: input.name,
      language: input.language,
      quality: input.quality,
      url: input.url,
    }
  }
}

/// Placeholder streams shown for any channel whose stream slot has never been
/// written.
pub fn default_channel_streams() -> Vec<ChannelStream> {
  [
    ("Stream HD", "English", "HD"),
    ("Stream 4K", "English", "4K"),
    ("Stream SD", "English", "SD"),
    ("Stream International", "Spanish", "HD"),
    ("Stream Premium", "English", "FHD"),
  ]
  .into_iter()
  .zip(1..)
  .map(|((name, language, quality), id)| ChannelStream {
    id,
    name: name.into(),
    language: language.into(),
    quality: quality.into(),
    url: "#".into(),
  })
  .collect()
}
