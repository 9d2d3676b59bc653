//! Core types and the local directory store for the Pitchside streaming
//! directory.
//!
//! Every collection (matches, stream links, stream sources, channels, channel
//! streams, contact messages) lives as one serialised list inside a named
//! slot of a [`SlotStore`](store::SlotStore). This crate is free of database
//! dependencies; durable backends live in their own crates.

pub mod channel;
pub mod clock;
pub mod codec;
pub mod collection;
pub mod directory;
pub mod error;
pub mod fixture;
pub mod memory;
pub mod message;
pub mod record;
pub mod resolve;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod slot;
pub mod slug;
pub mod store;
pub mod stream;

pub use directory::Directory;
pub use error::{Error, Result};
