//! Slot names. These are a boundary contract with existing stored data and
//! must not change.

pub const LIVE_MATCHES: &str = "liveMatches";
pub const UPCOMING_MATCHES: &str = "upcomingMatches";
/// Optional unified match list; takes precedence over the live/upcoming pair
/// when non-empty.
pub const MATCHES: &str = "matches";
pub const STREAM_LINKS: &str = "streamLinks";
pub const STREAM_SOURCES: &str = "streamSources";
pub const CHANNELS: &str = "channels";
pub const CONTACT_MESSAGES: &str = "contactMessages";
pub const ADMIN_AUTH: &str = "adminAuth";

/// The per-channel stream slot, `channel_{slug}_streams`.
pub fn channel_streams(slug: &str) -> String { format!("channel_{slug}_streams") }
