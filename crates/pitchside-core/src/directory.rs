//! [`Directory`] — the handle every screen goes through.
//!
//! It owns the injected store and clock and hands out typed [`Collection`]s,
//! the [`Resolver`] and the [`SessionGate`]. The operations defined here are
//! the ones that touch more than one record or more than one slot.
//!
//! Handles are cheap to create. Two `Directory` values built over the same
//! `Arc<S>` behave like two browser tabs over one local storage: each sees
//! the other's writes on its next read and clobbers them on its next save.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
  Error, Result,
  channel::{Channel, ChannelStream, NewChannel},
  clock::{Clock, SystemClock},
  codec,
  collection::Collection,
  fixture::{KICKOFF_SCORE, Match, MatchCategory, NewMatch, default_upcoming},
  message::{ContactMessage, NewContactMessage},
  record::Record,
  resolve::Resolver,
  schedule::Schedule,
  session::SessionGate,
  settings::{DEFAULT_ADMIN_PASSWORD, DirectoryConfig},
  slot, slug,
  store::SlotStore,
  stream::{
    NewStreamSource, PreparedStreamSource, StreamLink, StreamSource, normalize_embed_code,
  },
};

pub struct Directory<S> {
  store:          Arc<S>,
  clock:          Arc<dyn Clock>,
  admin_password: String,
}

impl<S> Clone for Directory<S> {
  fn clone(&self) -> Self {
    Self {
      store:          Arc::clone(&self.store),
      clock:          Arc::clone(&self.clock),
      admin_password: self.admin_password.clone(),
    }
  }
}

impl<S: SlotStore> Directory<S> {
  pub fn new(store: S) -> Self { Self::from_shared(Arc::new(store)) }

  /// A handle over a store that other handles may also hold.
  pub fn from_shared(store: Arc<S>) -> Self {
    Self {
      store,
      clock: Arc::new(SystemClock),
      admin_password: DEFAULT_ADMIN_PASSWORD.to_owned(),
    }
  }

  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn with_config(mut self, config: &DirectoryConfig) -> Self {
    self.admin_password = config.admin_password.clone();
    self
  }

  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Collections ─────────────────────────────────────────────────────────

  fn collection<R: Record>(&self, slot: impl Into<String>) -> Collection<'_, S, R> {
    Collection::new(&*self.store, &*self.clock, slot)
  }

  pub fn matches(&self, category: MatchCategory) -> Collection<'_, S, Match> {
    self.collection(category.slot())
  }

  /// The optional unified `matches` slot.
  pub fn unified_matches(&self) -> Collection<'_, S, Match> { self.collection(slot::MATCHES) }

  pub fn stream_links(&self) -> Collection<'_, S, StreamLink> {
    self.collection(slot::STREAM_LINKS)
  }

  pub fn stream_sources(&self) -> Collection<'_, S, StreamSource> {
    self.collection(slot::STREAM_SOURCES)
  }

  pub fn channels(&self) -> Collection<'_, S, Channel> { self.collection(slot::CHANNELS) }

  /// The stream list of one channel, in the slot named after its slug.
  pub fn channel_streams(&self, channel_slug: &str) -> Collection<'_, S, ChannelStream> {
    self.collection(slot::channel_streams(channel_slug))
  }

  pub fn contact_messages(&self) -> Collection<'_, S, ContactMessage> {
    self.collection(slot::CONTACT_MESSAGES)
  }

  pub fn resolver(&self) -> Resolver<'_, S> { Resolver::new(&*self.store, &*self.clock) }

  pub fn session(&self) -> SessionGate<'_, S> {
    SessionGate::new(&*self.store, &self.admin_password)
  }

  // ── Matches ─────────────────────────────────────────────────────────────

  /// Create a match in `category`'s slot. A live match created without a
  /// score starts at `0-0`; an upcoming match never carries one.
  pub fn create_match(&self, category: MatchCategory, mut input: NewMatch) -> Result<Match> {
    match category {
      MatchCategory::Live => {
        if input.score.as_deref().is_none_or(str::is_empty) {
          input.score = Some(KICKOFF_SCORE.to_owned());
        }
      }
      MatchCategory::Upcoming => input.score = None,
    }
    self.matches(category).create(input)
  }

  /// Move a match between the live and upcoming slots.
  ///
  /// Not atomic: the match is appended to `to` and then removed from `from`,
  /// as two separate slot writes. Only the first record with `id` moves;
  /// any other record sharing that id stays in `from`. Returns `None` when
  /// `from` has no such id.
  pub fn recategorize_match(
    &self,
    id: i64,
    from: MatchCategory,
    to: MatchCategory,
  ) -> Result<Option<Match>> {
    let source = self.matches(from);
    let mut remaining = source.list()?;
    let Some(position) = remaining.iter().position(|m| m.id == id) else {
      return Ok(None);
    };
    if from == to {
      return Ok(Some(remaining.swap_remove(position)));
    }
    let mut moved = remaining.remove(position);

    match to {
      MatchCategory::Live => {
        moved.score.get_or_insert_with(|| KICKOFF_SCORE.to_owned());
      }
      MatchCategory::Upcoming => moved.score = None,
    }

    let target = self.matches(to);
    let mut records = target.list()?;
    records.push(moved.clone());
    target.save(&records)?;
    source.save(&remaining)?;

    info!(id, %from, %to, "match recategorized");
    Ok(Some(moved))
  }

  /// Write the demo fixtures to `upcomingMatches` if that slot has never
  /// been written. Returns whether anything was seeded.
  pub fn seed_default_upcoming(&self) -> Result<bool> {
    let existing: Option<Vec<Match>> = codec::load_present(&*self.store, slot::UPCOMING_MATCHES)?;
    if existing.is_some() {
      return Ok(false);
    }
    self.matches(MatchCategory::Upcoming).save(&default_upcoming())?;
    debug!("seeded default upcoming matches");
    Ok(true)
  }

  /// The schedule page: upcoming matches in date order, grouped by day.
  pub fn schedule(&self) -> Result<Schedule> {
    Ok(Schedule::from_matches(self.matches(MatchCategory::Upcoming).list()?))
  }

  // ── Stream sources ──────────────────────────────────────────────────────

  fn prepare_stream_source(&self, input: NewStreamSource) -> Result<PreparedStreamSource> {
    let matched = self
      .resolver()
      .resolve_match(input.match_id)?
      .ok_or(Error::MatchNotFound(input.match_id))?;

    Ok(PreparedStreamSource {
      match_id:   input.match_id,
      slug:       slug::derive_stream_source_slug(
        &matched.home_team,
        &matched.away_team,
        &input.name,
      ),
      embed_code: normalize_embed_code(&input.embed_code),
      name:       input.name,
    })
  }

  /// Attach an embeddable source to a match.
  ///
  /// The match is resolved with the two-tier lookup to derive the slug; an
  /// unknown match is [`Error::MatchNotFound`]. The slug is not checked for
  /// collisions with existing sources.
  pub fn add_stream_source(&self, input: NewStreamSource) -> Result<StreamSource> {
    let prepared = self.prepare_stream_source(input)?;
    self.stream_sources().create(prepared)
  }

  /// Replace a source's match, name and embed code, re-deriving its slug.
  pub fn edit_stream_source(&self, id: i64, input: NewStreamSource) -> Result<bool> {
    let prepared = self.prepare_stream_source(input)?;
    self.stream_sources().update(id, |source| StreamSource {
      id:         source.id,
      match_id:   prepared.match_id,
      name:       prepared.name.clone(),
      embed_code: prepared.embed_code.clone(),
      slug:       prepared.slug.clone(),
    })
  }

  // ── Channels ────────────────────────────────────────────────────────────

  pub fn add_channel(&self, input: NewChannel) -> Result<Channel> { self.channels().create(input) }

  /// Delete a channel and its `channel_{slug}_streams` slot.
  ///
  /// This is the only path that cascades; `channels().remove(id)` leaves the
  /// stream slot behind. Returns the deleted channel, or `None` if absent.
  pub fn delete_channel(&self, id: i64) -> Result<Option<Channel>> {
    let channels = self.channels();
    let Some(channel) = channels.find(id)? else {
      return Ok(None);
    };
    channels.remove(id)?;
    self.channel_streams(&channel.slug).clear()?;
    info!(id, slug = %channel.slug, "channel deleted with its streams");
    Ok(Some(channel))
  }

  // ── Contact messages ────────────────────────────────────────────────────

  /// Store a contact-form submission at the head of the list.
  pub fn submit_contact_message(&self, input: NewContactMessage) -> Result<ContactMessage> {
    self.contact_messages().create(input)
  }

  pub fn mark_message_read(&self, id: i64) -> Result<bool> {
    self
      .contact_messages()
      .update(id, |message| ContactMessage { is_read: true, ..message })
  }

  pub fn unread_message_count(&self) -> Result<usize> {
    Ok(self.contact_messages().list()?.iter().filter(|m| !m.is_read).count())
  }
}
