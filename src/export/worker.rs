use log::debug;

use crate::audio::{Recording, TrackTags};
use crate::config::Settings;
use crate::error::TrackFailure;
use crate::tracklist::{Track, TrackEnd};

use super::plan::PlannedExport;

/// Millisecond range `[start, end)` to cut for `track`.
///
/// The open-ended last track stops `tail_trim_ms` short of the end of the
/// recording.
pub fn segment_bounds(track: &Track, recording_ms: u64, tail_trim_ms: u64) -> (u64, u64) {
    match track.end {
        TrackEnd::At(end) => (track.start, end),
        TrackEnd::EndOfRecording => (track.start, recording_ms.saturating_sub(tail_trim_ms)),
    }
}

/// Export every entry of `chunk`, in order, from the shared `recording`.
///
/// Stops at the first track that fails and reports it; files written before
/// that stay on disk. Returns how many files were written.
pub fn export_chunk(
    chunk: &[PlannedExport<'_>],
    recording: &Recording,
    album: &str,
    settings: &Settings,
) -> Result<usize, TrackFailure> {
    let recording_ms = recording.duration_ms();

    for entry in chunk {
        let track = entry.track;
        let (start, end) = segment_bounds(track, recording_ms, settings.split.tail_trim_ms);
        debug!(
            "Exporting '{} - {}' [{start}ms, {end}ms) to {}",
            track.artist,
            track.title,
            entry.path.display()
        );

        let segment = recording
            .slice(start, end)
            .fade_out(settings.split.fade_out_ms);
        let tags = TrackTags {
            artist: track.artist.clone(),
            album: album.to_string(),
            title: track.title.clone(),
        };

        segment
            .export(&entry.path, &tags, &settings.output)
            .map_err(|error| TrackFailure {
                artist: track.artist.clone(),
                title: track.title.clone(),
                path: entry.path.clone(),
                error: Box::new(error),
            })?;
    }

    Ok(chunk.len())
}
