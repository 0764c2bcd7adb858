/// Where a track stops.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrackEnd {
    /// Exclusive end offset in milliseconds (the next track's start).
    At(u64),
    /// The track runs to the end of the recording.
    EndOfRecording,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub artist: String,
    pub title: String,
    /// Offset from the start of the recording, in milliseconds.
    pub start: u64,
    pub end: TrackEnd,
}

/// One unprocessed track-list record, as read from the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrack {
    pub artist: String,
    pub title: String,
    pub start: String,
}

impl RawTrack {
    pub fn new(artist: impl Into<String>, title: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            start: start.into(),
        }
    }
}
