//! Cross-reference resolution between collections, done at read time.
//!
//! Foreign keys are plain ids and slugs; nothing enforces that their targets
//! exist. Every lookup here resolves a miss to `None` (the "unresolved"
//! sentinel) and never errors on it.

use chrono::{Days, NaiveDate};

use crate::{
  Result,
  channel::{ChannelStream, default_channel_streams},
  clock::Clock,
  codec,
  fixture::{Match, MatchCategory},
  slot,
  store::SlotStore,
  stream::{StreamLink, StreamSource},
};

/// Label shown in listings for a stream whose match cannot be resolved.
pub const UNKNOWN_MATCH: &str = "Unknown Match";

/// `"Home vs Away"`, `"Home"`, or [`UNKNOWN_MATCH`].
pub fn match_label(resolved: Option<&Match>) -> String {
  resolved.map_or_else(|| UNKNOWN_MATCH.to_owned(), Match::title)
}

pub struct Resolver<'d, S: ?Sized> {
  store: &'d S,
  clock: &'d dyn Clock,
}

impl<'d, S: SlotStore + ?Sized> Resolver<'d, S> {
  pub fn new(store: &'d S, clock: &'d dyn Clock) -> Self { Self { store, clock } }

  // ── Matches ─────────────────────────────────────────────────────────────

  /// The match set that id lookups search.
  ///
  /// Two tiers: when the unified `matches` slot is non-empty it is the only
  /// source, and the live/upcoming slots are ignored even if they hold ids it
  /// lacks. Otherwise live followed by upcoming.
  pub fn all_matches(&self) -> Result<Vec<Match>> {
    let unified: Vec<Match> = codec::load(self.store, slot::MATCHES)?;
    if !unified.is_empty() {
      return Ok(unified);
    }
    let mut combined: Vec<Match> = codec::load(self.store, slot::LIVE_MATCHES)?;
    combined.extend(codec::load::<_, Match>(self.store, slot::UPCOMING_MATCHES)?);
    Ok(combined)
  }

  pub fn resolve_match(&self, match_id: i64) -> Result<Option<Match>> {
    Ok(self.all_matches()?.into_iter().find(|m| m.id == match_id))
  }

  /// Public match page lookup: live first, then upcoming. The unified slot
  /// is not consulted. The first match carrying `slug` wins.
  pub fn resolve_match_by_slug(&self, slug: &str) -> Result<Option<Match>> {
    for category in [MatchCategory::Live, MatchCategory::Upcoming] {
      let found = codec::load::<_, Match>(self.store, category.slot())?
        .into_iter()
        .find(|m| m.slug == slug);
      if found.is_some() {
        return Ok(found);
      }
    }
    Ok(None)
  }

  /// Matches in `category` whose `date` is exactly `date` as `YYYY-MM-DD`.
  pub fn matches_on(&self, category: MatchCategory, date: NaiveDate) -> Result<Vec<Match>> {
    let wanted = date.format("%Y-%m-%d").to_string();
    let mut matches: Vec<Match> = codec::load(self.store, category.slot())?;
    matches.retain(|m| m.date == wanted);
    Ok(matches)
  }

  /// Live matches dated today (UTC, per the injected clock).
  pub fn live_today(&self) -> Result<Vec<Match>> {
    self.matches_on(MatchCategory::Live, self.clock.now().date_naive())
  }

  /// Upcoming matches dated tomorrow (UTC, per the injected clock).
  pub fn upcoming_tomorrow(&self) -> Result<Vec<Match>> {
    let today = self.clock.now().date_naive();
    match today.checked_add_days(Days::new(1)) {
      Some(tomorrow) => self.matches_on(MatchCategory::Upcoming, tomorrow),
      None => Ok(Vec::new()),
    }
  }

  // ── Streams ─────────────────────────────────────────────────────────────

  pub fn stream_links_for(&self, match_id: i64) -> Result<Vec<StreamLink>> {
    let mut links: Vec<StreamLink> = codec::load(self.store, slot::STREAM_LINKS)?;
    links.retain(|l| l.match_id == match_id);
    Ok(links)
  }

  pub fn stream_sources_for(&self, match_id: i64) -> Result<Vec<StreamSource>> {
    let mut sources: Vec<StreamSource> = codec::load(self.store, slot::STREAM_SOURCES)?;
    sources.retain(|s| s.match_id == match_id);
    Ok(sources)
  }

  /// Public viewing lookup. Slugs may collide; the earliest stored source
  /// wins.
  pub fn resolve_stream_source(&self, slug: &str) -> Result<Option<StreamSource>> {
    Ok(
      codec::load::<_, StreamSource>(self.store, slot::STREAM_SOURCES)?
        .into_iter()
        .find(|s| s.slug == slug),
    )
  }

  /// A stream source together with its (possibly unresolved) match.
  pub fn resolve_stream_page(
    &self,
    slug: &str,
  ) -> Result<Option<(StreamSource, Option<Match>)>> {
    let Some(source) = self.resolve_stream_source(slug)? else {
      return Ok(None);
    };
    let matched = self.resolve_match(source.match_id)?;
    Ok(Some((source, matched)))
  }

  // ── Channels ────────────────────────────────────────────────────────────

  /// Streams for the channel `channel_slug`.
  ///
  /// A slot that has never been written resolves to the five-entry default
  /// sample, for every channel, seeded or not. A slot that exists resolves to
  /// its contents, even when that is an empty list.
  pub fn resolve_channel_streams(&self, channel_slug: &str) -> Result<Vec<ChannelStream>> {
    let key = slot::channel_streams(channel_slug);
    Ok(codec::load_present(self.store, &key)?.unwrap_or_else(default_channel_streams))
  }
}
