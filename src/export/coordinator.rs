use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use log::info;

use crate::audio::Recording;
use crate::config::Settings;
use crate::error::{Result, SplitError, TrackFailure};
use crate::tracklist::Track;

use super::partition::{partition, worker_count};
use super::plan::{PlannedExport, plan_outputs};
use super::worker::export_chunk;

/// How a run was executed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Exported on the calling thread.
    Serial,
    /// Exported by `workers` scoped threads, one chunk each.
    Concurrent { workers: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub mode: ExecutionMode,
    /// Output files in track order.
    pub files: Vec<PathBuf>,
}

/// Split the recording at `audio_path` into one tagged file per track.
///
/// Files go to `<settings.output.root>/<album>`, which is created if needed.
/// Output names are resolved (and collisions checked) before the recording
/// is decoded, so a bad track list fails without any audio work.
pub fn split_recording(
    tracks: &[Track],
    audio_path: &Path,
    album: &str,
    settings: &Settings,
    parallelism: NonZeroUsize,
) -> Result<ExportReport> {
    let dir = settings.output.root.join(album);
    let plan = plan_outputs(tracks, &dir, settings.output.on_collision)?;

    if !dir.exists() {
        info!("Creating album directory at '{}'", dir.display());
    }
    fs::create_dir_all(&dir)?;

    info!("Loading audio from '{}'...", audio_path.display());
    let recording = Recording::open(audio_path)?;
    info!(
        "Done, loaded {}ms of audio ({} channels at {} Hz)",
        recording.duration_ms(),
        recording.channels(),
        recording.sample_rate()
    );

    let mode = export_planned(&plan, &recording, album, settings, parallelism)?;

    Ok(ExportReport {
        mode,
        files: plan.into_iter().map(|p| p.path).collect(),
    })
}

/// Export an already planned track list against a decoded recording.
///
/// Short lists run on the calling thread. Otherwise the plan is split into
/// balanced chunks and every chunk gets its own scoped thread; all of them
/// are joined and every failure is collected before returning.
pub fn export_planned(
    plan: &[PlannedExport<'_>],
    recording: &Recording,
    album: &str,
    settings: &Settings,
    parallelism: NonZeroUsize,
) -> Result<ExecutionMode> {
    if plan.len() < settings.split.serial_threshold {
        info!("Exporting {} track(s)...", plan.len());
        export_chunk(plan, recording, album, settings).map_err(|failure| SplitError::Export {
            failures: vec![failure],
        })?;
        info!("Done, exported {} track(s)", plan.len());
        return Ok(ExecutionMode::Serial);
    }

    let workers = worker_count(
        parallelism,
        settings.split.workers_per_core,
        settings.split.workers,
    );
    let chunks = partition(plan, workers);
    info!(
        "Exporting {} tracks with {} workers, this may take a while...",
        plan.len(),
        workers
    );

    let written = run_chunks(&chunks, |chunk| {
        export_chunk(chunk, recording, album, settings)
    })?;

    info!("Done, exported {written} tracks");
    Ok(ExecutionMode::Concurrent { workers })
}

/// Run `export` on one scoped thread per chunk and join them all.
///
/// Returns the number of tracks written, or every failure once all threads
/// have finished. A thread that panics is reported against the first track
/// of its chunk.
pub(super) fn run_chunks<F>(chunks: &[&[PlannedExport<'_>]], export: F) -> Result<usize>
where
    F: Fn(&[PlannedExport<'_>]) -> Result<usize, TrackFailure> + Sync,
{
    let export = &export;
    let results: Vec<Result<usize, TrackFailure>> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| scope.spawn(move || export(chunk)))
            .collect();

        handles
            .into_iter()
            .zip(chunks)
            .map(|(handle, chunk)| handle.join().unwrap_or_else(|_| Err(panicked(chunk))))
            .collect()
    });

    let mut written = 0;
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(n) => written += n,
            Err(failure) => failures.push(failure),
        }
    }

    if failures.is_empty() {
        Ok(written)
    } else {
        Err(SplitError::Export { failures })
    }
}

fn panicked(chunk: &[PlannedExport<'_>]) -> TrackFailure {
    let (artist, title, path) = match chunk.first() {
        Some(entry) => (
            entry.track.artist.clone(),
            entry.track.title.clone(),
            entry.path.clone(),
        ),
        None => (String::new(), String::new(), PathBuf::new()),
    };
    TrackFailure {
        artist,
        title,
        path,
        error: Box::new(SplitError::WorkerPanicked),
    }
}
