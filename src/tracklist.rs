//! Track list: timestamps, sanitizing and boundary derivation.
//!
//! Raw `artist, title, start` records are turned into an ordered list of
//! [`Track`]s whose end boundaries are taken from the following track.

mod model;
mod parse;
mod sanitize;
mod timestamp;

pub use model::{RawTrack, Track, TrackEnd};
pub use parse::{build_tracks, read_csv};
pub use sanitize::sanitize;
pub use timestamp::{TimestampError, parse_timestamp};
