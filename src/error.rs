//! Crate-wide error type.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::tracklist::TimestampError;

/// Errors produced while building the track list or exporting tracks.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A start timestamp could not be parsed.
    #[error("row {row}: invalid timestamp '{value}': {source}")]
    Format {
        row: usize,
        value: String,
        #[source]
        source: TimestampError,
    },

    /// The track list contained no records.
    #[error("track list is empty")]
    EmptyInput,

    /// A start timestamp is earlier than the one declared before it.
    #[error("row {row}: start {start_ms}ms is before the previous track's start {previous_ms}ms")]
    UnorderedTracks {
        row: usize,
        start_ms: u64,
        previous_ms: u64,
    },

    /// A track-list record is missing one of the artist/title/start columns.
    #[error("row {row}: missing '{column}' column")]
    MissingColumn { row: usize, column: &'static str },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The source recording could not be decoded.
    #[error("failed to decode '{}': {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// Two tracks resolve to the same output file.
    #[error("two tracks would be written to '{}'", .path.display())]
    DuplicateOutput { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure from the WAV encoder.
    #[error("failed to encode audio: {0}")]
    Encode(#[from] hound::Error),

    /// Failure while writing metadata tags.
    #[error("failed to write tags: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    /// An export worker panicked before finishing its chunk.
    #[error("export worker panicked")]
    WorkerPanicked,

    /// One or more export workers failed.
    #[error("{} track(s) failed to export: {}", .failures.len(), FailureList(.failures))]
    Export { failures: Vec<TrackFailure> },
}

/// A single track that could not be exported, as reported by a worker.
#[derive(Debug)]
pub struct TrackFailure {
    pub artist: String,
    pub title: String,
    pub path: PathBuf,
    pub error: Box<SplitError>,
}

impl fmt::Display for TrackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{} - {}' ({}): {}",
            self.artist,
            self.title,
            self.path.display(),
            self.error
        )
    }
}

struct FailureList<'a>(&'a [TrackFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

pub type Result<T, E = SplitError> = std::result::Result<T, E>;
