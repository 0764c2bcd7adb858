use std::num::NonZeroUsize;
use std::path::Path;
use std::thread;

use anyhow::Context;
use log::info;

use crate::export::{ExecutionMode, split_recording};
use crate::tracklist::{build_tracks, read_csv};

mod settings;

pub const USAGE: &str = "Usage of this program:\n\
    tracksplit <tracklist csv file> <audio file> <album name>";

/// Run a split from command-line arguments (program name excluded).
///
/// Anything other than exactly three arguments prints usage and returns
/// without doing any work.
pub fn run(args: &[String]) -> anyhow::Result<()> {
    let [tracklist_path, audio_path, album] = args else {
        println!("{USAGE}");
        return Ok(());
    };

    let settings = settings::load_settings();

    let raw = read_csv(Path::new(tracklist_path), &settings.tracklist)
        .with_context(|| format!("failed to read track list '{tracklist_path}'"))?;
    let tracks = build_tracks(&raw)
        .with_context(|| format!("invalid track list '{tracklist_path}'"))?;

    let parallelism = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let report = split_recording(&tracks, Path::new(audio_path), album, &settings, parallelism)
        .with_context(|| format!("failed to split '{audio_path}'"))?;

    match report.mode {
        ExecutionMode::Serial => info!("Wrote {} file(s)", report.files.len()),
        ExecutionMode::Concurrent { workers } => info!(
            "Wrote {} file(s) using {workers} workers",
            report.files.len()
        ),
    }
    Ok(())
}
