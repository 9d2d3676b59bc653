//! URL slugs derived from human names.
//!
//! Normalisation is lowercase plus "every whitespace run becomes one hyphen".
//! Nothing is trimmed, no other characters are stripped, and there is no
//! uniqueness check: two sources for the same fixture with the same name get
//! the same slug, and lookups return whichever is found first.

/// Lowercase `segment` and collapse each run of whitespace into a single `-`.
pub fn normalize_segment(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len());
  let mut in_space = false;
  for c in segment.chars() {
    if c.is_whitespace() {
      if !in_space {
        out.push('-');
      }
      in_space = true;
    } else {
      out.extend(c.to_lowercase());
      in_space = false;
    }
  }
  out
}

/// `{home}-vs-{away}`, or just `{home}` when `away` is empty.
pub fn derive_match_slug(home: &str, away: &str) -> String {
  let home = normalize_segment(home);
  let away = normalize_segment(away);
  if away.is_empty() {
    home
  } else {
    format!("{home}-vs-{away}")
  }
}

/// `{home}-vs-{away}-{source}`. The `-vs-` joint is kept even when `away` is
/// empty.
pub fn derive_stream_source_slug(home: &str, away: &str, source: &str) -> String {
  format!(
    "{}-vs-{}-{}",
    normalize_segment(home),
    normalize_segment(away),
    normalize_segment(source)
  )
}

pub fn derive_channel_slug(name: &str) -> String { normalize_segment(name) }

/// Title-case the hyphen-separated words of a slug: `sky-sports` becomes
/// `Sky Sports`.
pub fn humanize_slug(slug: &str) -> String {
  slug
    .split('-')
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn match_slug_with_two_sides() {
    assert_eq!(derive_match_slug("Real Madrid", "Barcelona"), "real-madrid-vs-barcelona");
  }

  #[test]
  fn match_slug_single_entrant() {
    assert_eq!(derive_match_slug("Monaco Grand Prix", ""), "monaco-grand-prix");
  }

  #[test]
  fn whitespace_runs_collapse_but_are_not_trimmed() {
    assert_eq!(normalize_segment("Paris \t Saint-Germain"), "paris-saint-germain");
    assert_eq!(normalize_segment(" Inter "), "-inter-");
  }

  #[test]
  fn punctuation_passes_through() {
    assert_eq!(normalize_segment("A.C. Milan"), "a.c.-milan");
  }

  #[test]
  fn stream_source_slug_segments_normalised_independently() {
    assert_eq!(
      derive_stream_source_slug("Manchester United", "Man City", "Stream  One"),
      "manchester-united-vs-man-city-stream-one"
    );
    assert_eq!(derive_stream_source_slug("Monaco GP", "", "HD"), "monaco-gp-vs--hd");
  }

  #[test]
  fn identical_inputs_collide() {
    // Known limitation: no suffixing on collision.
    let a = derive_stream_source_slug("Arsenal", "Chelsea", "Main");
    let b = derive_stream_source_slug("arsenal", "CHELSEA", "main");
    assert_eq!(a, b);
  }

  #[test]
  fn humanize() {
    assert_eq!(humanize_slug("sky-sports-main-event"), "Sky Sports Main Event");
    assert_eq!(humanize_slug("espn"), "Espn");
  }
}
