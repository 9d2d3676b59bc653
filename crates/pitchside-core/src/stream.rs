//! Stream links and embeddable stream sources attached to matches.
//!
//! Both carry a plain `match_id` pointing into the match collections. Nothing
//! checks that the match exists, and deleting a match leaves its links and
//! sources in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

// ─── StreamLink ──────────────────────────────────────────────────────────────

/// An external link to a match stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamLink {
  pub id:       i64,
  pub match_id: i64,
  pub name:     String,
  pub url:      String,
  #[serde(default)]
  pub quality:  String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub channel:  Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewStreamLink {
  pub match_id: i64,
  pub name:     String,
  pub url:      String,
  pub quality:  String,
  pub language: Option<String>,
  pub channel:  Option<String>,
}

impl Record for StreamLink {
  type New = NewStreamLink;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: NewStreamLink, _created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      match_id: input.match_id,
      name: input.name,
      url: input.url,
      quality: input.quality,
      language: input.language,
      channel: input.channel,
    }
  }
}

// ─── StreamSource ────────────────────────────────────────────────────────────

/// An embeddable player for a match, viewed publicly by its `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSource {
  pub id:         i64,
  pub match_id:   i64,
  pub name:       String,
  /// Raw `<iframe>` markup. Bare URLs are wrapped on the way in.
  pub embed_code: String,
  /// `{home}-vs-{away}-{name}`; not checked for uniqueness.
  #[serde(default)]
  pub slug:       String,
}

/// Input to [`Directory::add_stream_source`](crate::Directory::add_stream_source).
/// The slug is derived from the resolved match, so it is not accepted here.
#[derive(Debug, Clone, Default)]
pub struct NewStreamSource {
  pub match_id:   i64,
  pub name:       String,
  pub embed_code: String,
}

/// A [`NewStreamSource`] after the match has been resolved.
#[derive(Debug, Clone)]
pub struct PreparedStreamSource {
  pub match_id:   i64,
  pub name:       String,
  pub embed_code: String,
  pub slug:       String,
}

impl Record for StreamSource {
  type New = PreparedStreamSource;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: PreparedStreamSource, _created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      match_id: input.match_id,
      name: input.name,
      embed_code: input.embed_code,
      slug: input.slug,
    }
  }
}

/// Trim `raw` and, unless it already contains an `<iframe`, treat it as a
/// bare URL and wrap it in a full-size iframe.
pub fn normalize_embed_code(raw: &str) -> String {
  let code = raw.trim();
  if code.contains("<iframe") {
    code.to_owned()
  } else {
    format!(
      r#"<iframe src="{code}" width="100%" height="100%" frameborder="0" allowfullscreen></iframe>"#
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_url_is_wrapped() {
    assert_eq!(
      normalize_embed_code("  https://player.example/abc \n"),
      r#"<iframe src="https://player.example/abc" width="100%" height="100%" frameborder="0" allowfullscreen></iframe>"#
    );
  }

  #[test]
  fn iframe_markup_is_kept() {
    let markup = r#"<iframe src="https://x.example" width="640"></iframe>"#;
    assert_eq!(normalize_embed_code(markup), markup);
  }

  #[test]
  fn optional_link_fields_are_omitted() {
    let link = StreamLink::assemble(
      3,
      NewStreamLink {
        match_id: 9,
        name: "Main".into(),
        url: "https://s.example".into(),
        quality: "HD".into(),
        ..NewStreamLink::default()
      },
      Utc::now(),
    );
    let v = serde_json::to_value(&link).unwrap();
    assert_eq!(v["matchId"], 9);
    assert!(v.get("language").is_none());
    assert!(v.get("channel").is_none());
  }
}
