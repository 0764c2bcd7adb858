use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::config::{OutputSettings, SampleFormatSetting};
use crate::error::Result;

use super::recording::{frames_to_ms, ms_to_frames};
use super::tags::TrackTags;

/// An owned stretch of audio cut from a [`super::Recording`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl Segment {
    pub(super) fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> u64 {
        (self.samples.len() / self.channels as usize) as u64
    }

    pub fn duration_ms(&self) -> u64 {
        frames_to_ms(self.frames(), self.sample_rate)
    }

    /// Ramp the last `fade_ms` down to silence.
    ///
    /// The gain falls linearly and reaches zero on the final frame. A segment
    /// shorter than the fade is faded over its whole length.
    pub fn fade_out(mut self, fade_ms: u64) -> Self {
        let frames = self.frames() as usize;
        let fade_frames = (ms_to_frames(fade_ms, self.sample_rate) as usize).min(frames);
        if fade_frames == 0 {
            return self;
        }

        let ch = self.channels as usize;
        let first = frames - fade_frames;
        for (step, frame) in self.samples[first * ch..]
            .chunks_exact_mut(ch)
            .enumerate()
        {
            let gain = (fade_frames - 1 - step) as f32 / fade_frames as f32;
            for sample in frame {
                *sample *= gain;
            }
        }
        self
    }

    /// Encode to a WAV file at `path`.
    pub fn write_wav(&self, path: &Path, format: SampleFormatSetting) -> Result<()> {
        let spec = match format {
            SampleFormatSetting::Int16 => WavSpec {
                channels: self.channels,
                sample_rate: self.sample_rate,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            },
            SampleFormatSetting::Float32 => WavSpec {
                channels: self.channels,
                sample_rate: self.sample_rate,
                bits_per_sample: 32,
                sample_format: SampleFormat::Float,
            },
        };

        let mut writer = WavWriter::create(path, spec)?;
        match format {
            SampleFormatSetting::Int16 => {
                for &sample in &self.samples {
                    writer.write_sample(to_i16(sample))?;
                }
            }
            SampleFormatSetting::Float32 => {
                for &sample in &self.samples {
                    writer.write_sample(sample)?;
                }
            }
        }
        writer.finalize()?;
        Ok(())
    }

    /// Write the audio to `path`, then tag it.
    pub fn export(&self, path: &Path, tags: &TrackTags, settings: &OutputSettings) -> Result<()> {
        self.write_wav(path, settings.sample_format)?;
        tags.write_to(path, settings.tag_format)
    }
}

fn to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}
