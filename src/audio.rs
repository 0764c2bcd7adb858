//! Decoded audio and the per-track segments cut from it.
//!
//! A [`Recording`] is decoded once and then only read; every export slices
//! its own [`Segment`] copy, fades it and writes it out with tags.

mod recording;
mod segment;
mod tags;

pub use recording::Recording;
pub use segment::Segment;
pub use tags::TrackTags;

#[cfg(test)]
mod tests;
