//! Split one long recording into tagged per-track files.
//!
//! The pipeline reads a track list ([`tracklist`]), decodes the recording
//! once ([`audio`]) and exports every track concurrently ([`export`]).

pub mod audio;
pub mod config;
pub mod error;
pub mod export;
pub mod runtime;
pub mod tracklist;

pub use error::{Result, SplitError, TrackFailure};
