use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;

use crate::config::TrackListSettings;
use crate::error::{Result, SplitError};

use super::model::{RawTrack, Track, TrackEnd};
use super::sanitize::sanitize;
use super::timestamp::parse_timestamp;

const COLUMNS: [&str; 3] = ["artist", "title", "start"];

/// Read raw `artist, title, start` records from a CSV file.
///
/// Columns past the third are ignored. Every row is data unless
/// `settings.has_headers` is set.
pub fn read_csv(path: &Path, settings: &TrackListSettings) -> Result<Vec<RawTrack>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(settings.has_headers)
        .delimiter(settings.delimiter as u8)
        .flexible(true)
        .from_path(path)?;

    let mut raw = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        raw.push(raw_from_record(&record, i + 1)?);
    }
    Ok(raw)
}

fn raw_from_record(record: &StringRecord, row: usize) -> Result<RawTrack> {
    let field = |idx: usize| {
        record
            .get(idx)
            .ok_or(SplitError::MissingColumn {
                row,
                column: COLUMNS[idx],
            })
    };

    Ok(RawTrack::new(field(0)?, field(1)?, field(2)?))
}

/// Turn raw records into ordered tracks with resolved end boundaries.
///
/// The order of `raw` is kept as is; each track ends where the next one
/// starts and the last runs to the end of the recording. A start that is
/// earlier than its predecessor's is rejected rather than reordered.
pub fn build_tracks(raw: &[RawTrack]) -> Result<Vec<Track>> {
    info!("Parsing track list...");

    if raw.is_empty() {
        return Err(SplitError::EmptyInput);
    }

    let mut tracks: Vec<Track> = Vec::with_capacity(raw.len());
    for (i, record) in raw.iter().enumerate() {
        let row = i + 1;
        let start = parse_timestamp(&record.start).map_err(|source| SplitError::Format {
            row,
            value: record.start.clone(),
            source,
        })?;

        if let Some(previous) = tracks.last() {
            if start < previous.start {
                return Err(SplitError::UnorderedTracks {
                    row,
                    start_ms: start,
                    previous_ms: previous.start,
                });
            }
        }

        tracks.push(Track {
            artist: sanitize(&record.artist),
            title: sanitize(&record.title),
            start,
            end: TrackEnd::EndOfRecording,
        });
    }

    for i in 0..tracks.len() - 1 {
        tracks[i].end = TrackEnd::At(tracks[i + 1].start);
    }

    info!("Done, parsed {} tracks", tracks.len());
    Ok(tracks)
}
