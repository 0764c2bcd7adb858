//! Whole-file decoding into an in-memory sample buffer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use log::warn;
use rodio::{Decoder, Source};

use crate::error::{Result, SplitError};

use super::segment::Segment;

/// The fully decoded source audio.
///
/// Samples are interleaved `f32` in `[-1.0, 1.0]`. Nothing mutates a
/// `Recording` after it is built, so it can be shared by reference across
/// export workers.
#[derive(Debug, Clone)]
pub struct Recording {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl Recording {
    /// Decode the file at `path` in full. The container is detected by the decoder.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;

        let decoder = Decoder::new(BufReader::new(file)).map_err(|e| SplitError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let channels = u16::from(decoder.channels());
        let sample_rate = u32::from(decoder.sample_rate());
        if channels == 0 || sample_rate == 0 {
            return Err(SplitError::Decode {
                path: path.to_path_buf(),
                reason: format!("unusable stream layout ({channels} channels at {sample_rate} Hz)"),
            });
        }

        // The decoder ends the stream on a mid-file error instead of reporting it.
        let expected = decoder.total_duration();
        let samples: Vec<f32> = decoder.collect();
        let recording = Self::from_samples(samples, channels, sample_rate);

        if let Some(missing) = missing_frames(recording.frames(), expected, sample_rate) {
            warn!(
                "'{}' decoded {} frames short of its reported length, it may be truncated or corrupt",
                path.display(),
                missing
            );
        }
        Ok(recording)
    }

    /// Wrap an interleaved buffer. A trailing partial frame is dropped.
    pub fn from_samples(mut samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
        let channels = channels.max(1);
        let whole = samples.len() - samples.len() % channels as usize;
        samples.truncate(whole);
        Self {
            samples,
            channels,
            sample_rate: sample_rate.max(1),
        }
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frames(&self) -> u64 {
        (self.samples.len() / self.channels as usize) as u64
    }

    pub fn duration_ms(&self) -> u64 {
        frames_to_ms(self.frames(), self.sample_rate)
    }

    /// Copy out the frames covering `[start_ms, end_ms)`.
    ///
    /// Bounds past the end of the recording are clamped, and an end before
    /// the start gives an empty segment.
    pub fn slice(&self, start_ms: u64, end_ms: u64) -> Segment {
        let frames = self.frames();
        let start = ms_to_frames(start_ms, self.sample_rate).min(frames);
        let end = ms_to_frames(end_ms, self.sample_rate).clamp(start, frames);

        let ch = self.channels as usize;
        let range = (start as usize * ch)..(end as usize * ch);
        Segment::new(self.samples[range].to_vec(), self.channels, self.sample_rate)
    }
}

/// Frames missing from a decode when it falls more than 1% short of `expected`.
pub(super) fn missing_frames(
    decoded: u64,
    expected: Option<Duration>,
    sample_rate: u32,
) -> Option<u64> {
    let expected_ms = u64::try_from(expected?.as_millis()).unwrap_or(u64::MAX);
    let expected = ms_to_frames(expected_ms, sample_rate);
    let missing = expected.saturating_sub(decoded);
    (missing > expected / 100).then_some(missing)
}

pub(super) fn ms_to_frames(ms: u64, sample_rate: u32) -> u64 {
    let frames = u128::from(ms) * u128::from(sample_rate) / 1_000;
    frames.min(u128::from(u64::MAX)) as u64
}

pub(super) fn frames_to_ms(frames: u64, sample_rate: u32) -> u64 {
    let ms = u128::from(frames) * 1_000 / u128::from(sample_rate.max(1));
    ms.min(u128::from(u64::MAX)) as u64
}
