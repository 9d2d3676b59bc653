//! Matches (fixtures) and their live/upcoming categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString};

use crate::{record::Record, slot, slug};

// ─── Category ────────────────────────────────────────────────────────────────

/// Which of the two split match slots a match lives in.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchCategory {
  Live,
  Upcoming,
}

impl MatchCategory {
  pub fn slot(self) -> &'static str {
    match self {
      Self::Live => slot::LIVE_MATCHES,
      Self::Upcoming => slot::UPCOMING_MATCHES,
    }
  }
}

/// Score given to a live match created without one.
pub const KICKOFF_SCORE: &str = "0-0";

// ─── Match ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
  pub id:          i64,
  #[serde(default)]
  pub competition: String,
  pub home_team:   String,
  /// Empty for single-entrant events (a grand prix, a race).
  #[serde(default)]
  pub away_team:   String,
  #[serde(default)]
  pub date:        String,
  #[serde(default)]
  pub time:        String,
  #[serde(default)]
  pub slug:        String,
  /// Present only for live matches. Stored as `""` when absent, and an
  /// empty stored string decodes as `None`.
  #[serde(default, deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
  pub score:       Option<String>,
  /// Advisory link count typed in by an admin; never recomputed.
  #[serde(default)]
  pub links:       u32,
}

impl Match {
  pub fn is_live(&self) -> bool { self.score.is_some() }

  /// `"Home vs Away"`, or just `"Home"` when there is no away side.
  pub fn title(&self) -> String {
    if self.away_team.is_empty() {
      self.home_team.clone()
    } else {
      format!("{} vs {}", self.home_team, self.away_team)
    }
  }
}

/// Input to [`Directory::create_match`](crate::Directory::create_match).
#[derive(Debug, Clone, Default)]
pub struct NewMatch {
  pub competition: String,
  pub home_team:   String,
  pub away_team:   String,
  pub date:        String,
  pub time:        String,
  /// Derived from the team names when `None`.
  pub slug:        Option<String>,
  pub score:       Option<String>,
  pub links:       u32,
}

impl NewMatch {
  pub fn new(
    competition: impl Into<String>,
    home_team: impl Into<String>,
    away_team: impl Into<String>,
  ) -> Self {
    Self {
      competition: competition.into(),
      home_team: home_team.into(),
      away_team: away_team.into(),
      ..Self::default()
    }
  }

  pub fn on(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
    self.date = date.into();
    self.time = time.into();
    self
  }
}

impl Record for Match {
  type New = NewMatch;

  fn id(&self) -> i64 { self.id }

  fn assemble(id: i64, input: NewMatch, _created_at: DateTime<Utc>) -> Self {
    let slug = input
      .slug
      .unwrap_or_else(|| slug::derive_match_slug(&input.home_team, &input.away_team));
    Self {
      id,
      competition: input.competition,
      home_team: input.home_team,
      away_team: input.away_team,
      date: input.date,
      time: input.time,
      slug,
      score: input.score.filter(|s| !s.is_empty()),
      links: input.links,
    }
  }
}

fn none_as_empty<S>(score: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(score.as_deref().unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<String> = Option::deserialize(deserializer)?;
  Ok(raw.filter(|s| !s.is_empty()))
}

// ─── Demo fixtures ───────────────────────────────────────────────────────────

/// The fixtures written to `upcomingMatches` on a store that has never held
/// that slot.
pub fn default_upcoming() -> Vec<Match> {
  let fixture = |id, competition: &str, home: &str, away: &str, date: &str, time: &str, slug: &str| Match {
    id,
    competition: competition.into(),
    home_team: home.into(),
    away_team: away.into(),
    date: date.into(),
    time: time.into(),
    slug: slug.into(),
    score: None,
    links: 0,
  };

  vec![
    fixture(
      1,
      "UEFA Champions League",
      "Paris Saint-Germain",
      "Manchester United",
      "April 16, 2025",
      "19:45 GMT",
      "psg-vs-man-utd",
    ),
    fixture(2, "Premier League", "Arsenal", "Chelsea", "April 17, 2025", "15:00 GMT", "arsenal-vs-chelsea"),
    fixture(3, "Formula 1", "Monaco Grand Prix", "", "April 18, 2025", "13:00 GMT", "monaco-grand-prix"),
    fixture(4, "Boxing", "Tyson Fury", "Anthony Joshua", "April 20, 2025", "22:00 GMT", "fury-vs-joshua"),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_string_forms() {
    assert_eq!(MatchCategory::Live.to_string(), "live");
    assert_eq!("upcoming".parse::<MatchCategory>().unwrap(), MatchCategory::Upcoming);
    assert_eq!(MatchCategory::Upcoming.slot(), "upcomingMatches");
  }

  #[test]
  fn empty_score_decodes_as_absent() {
    let json = r#"{"id":1,"competition":"Serie A","homeTeam":"Inter","awayTeam":"Milan",
      "date":"2025-05-01","time":"20:45","slug":"inter-vs-milan","score":"","links":2}"#;
    let m: Match = serde_json::from_str(json).unwrap();
    assert_eq!(m.score, None);
    assert!(!m.is_live());
    assert_eq!(m.links, 2);
  }

  #[test]
  fn legacy_shape_without_time_or_links_decodes() {
    let json = r#"{"id":7,"homeTeam":"Lakers","awayTeam":"Celtics","competition":"NBA",
      "date":"2025-05-01","status":"upcoming"}"#;
    let m: Match = serde_json::from_str(json).unwrap();
    assert_eq!(m.time, "");
    assert_eq!(m.links, 0);
    assert_eq!(m.title(), "Lakers vs Celtics");
  }

  #[test]
  fn serialises_with_camel_case_keys() {
    let m = Match::assemble(5, NewMatch::new("F1", "Monaco Grand Prix", ""), Utc::now());
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["homeTeam"], "Monaco Grand Prix");
    assert_eq!(v["awayTeam"], "");
    assert_eq!(v["slug"], "monaco-grand-prix");
    assert_eq!(v["score"], "");
  }
}
