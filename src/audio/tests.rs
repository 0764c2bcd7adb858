use std::fs;
use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavSpec, WavWriter};
use lofty::prelude::*;
use lofty::tag::TagType;
use tempfile::tempdir;

use super::recording::missing_frames;
use super::{Recording, TrackTags};
use crate::config::{OutputSettings, SampleFormatSetting, TagFormatSetting};
use crate::error::SplitError;

const RATE: u32 = 1_000;

/// One channel, one frame per millisecond, every sample at full scale.
fn flat_recording(duration_ms: u64) -> Recording {
    Recording::from_samples(vec![1.0; duration_ms as usize], 1, RATE)
}

fn write_tone(path: &Path, sample_rate: u32, channels: u16, duration_ms: u64) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let frames = sample_rate as u64 * duration_ms / 1_000;
    let mut writer = WavWriter::create(path, spec).unwrap();
    for n in 0..frames {
        let theta = (n as f32 / sample_rate as f32) * std::f32::consts::TAU * 440.0;
        let sample = (theta.sin() * i16::MAX as f32 * 0.5) as i16;
        for _ in 0..channels {
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}

#[test]
fn duration_follows_frame_count_and_rate() {
    let rec = Recording::from_samples(vec![0.0; 8_000 * 2 * 3], 2, 8_000);
    assert_eq!(rec.frames(), 24_000);
    assert_eq!(rec.duration_ms(), 3_000);
}

#[test]
fn partial_trailing_frame_is_dropped() {
    let rec = Recording::from_samples(vec![0.0; 5], 2, 8_000);
    assert_eq!(rec.frames(), 2);
}

#[test]
fn slice_covers_half_open_range() {
    let rec = flat_recording(180_000);
    assert_eq!(rec.slice(0, 90_000).frames(), 90_000);
    assert_eq!(rec.slice(90_000, 179_900).frames(), 89_900);
}

#[test]
fn slice_clamps_to_recording_and_handles_inverted_bounds() {
    let rec = flat_recording(1_000);
    assert_eq!(rec.slice(500, 5_000).frames(), 500);
    assert_eq!(rec.slice(2_000, 3_000).frames(), 0);
    assert_eq!(rec.slice(800, 200).frames(), 0);
}

#[test]
fn slice_keeps_channel_layout() {
    let samples: Vec<f32> = (0..20).map(|i| i as f32).collect();
    let rec = Recording::from_samples(samples, 2, RATE);
    let seg = rec.slice(2, 5);
    assert_eq!(seg.channels(), 2);
    assert_eq!(seg.samples(), &[4.0f32, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn fade_out_ramps_tail_to_silence_and_leaves_head() {
    let seg = flat_recording(3_000).slice(0, 3_000).fade_out(1_000);
    let s = seg.samples();

    assert!(s[..2_000].iter().all(|&v| v == 1.0));
    assert_eq!(*s.last().unwrap(), 0.0);
    assert!(s[2_000] > 0.99);
    assert!(s[2_000..].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn fade_out_longer_than_segment_fades_everything() {
    let seg = flat_recording(400).slice(0, 400).fade_out(1_000);
    let s = seg.samples();
    assert!(s[0] < 1.0);
    assert_eq!(*s.last().unwrap(), 0.0);
}

#[test]
fn fade_out_on_empty_segment_is_a_no_op() {
    let seg = flat_recording(100).slice(50, 50).fade_out(1_000);
    assert_eq!(seg.frames(), 0);
}

#[test]
fn open_decodes_wav_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_tone(&path, 8_000, 2, 1_500);

    let rec = Recording::open(&path).unwrap();
    assert_eq!(rec.channels(), 2);
    assert_eq!(rec.sample_rate(), 8_000);
    assert_eq!(rec.duration_ms(), 1_500);
}

#[test]
fn open_rejects_non_audio_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.bin");
    fs::write(&path, b"definitely not an audio file").unwrap();

    let err = Recording::open(&path).unwrap_err();
    assert!(matches!(err, SplitError::Decode { .. }));
}

#[test]
fn open_reports_missing_file_as_io() {
    let dir = tempdir().unwrap();
    let err = Recording::open(&dir.path().join("missing.wav")).unwrap_err();
    assert!(matches!(err, SplitError::Io(_)));
}

#[test]
fn export_writes_decodable_wav_with_tags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Artist - Title.wav");
    let tags = TrackTags {
        artist: "Artist".to_string(),
        album: "Live Set".to_string(),
        title: "Title".to_string(),
    };

    let seg = flat_recording(2_000).slice(0, 1_500).fade_out(1_000);
    seg.export(&path, &tags, &OutputSettings::default()).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().bits_per_sample, 16);
    assert_eq!(reader.duration(), 1_500);

    let tagged = lofty::read_from_path(&path).unwrap();
    let tag = tagged.tag(TagType::RiffInfo).expect("RIFF INFO tag");
    assert_eq!(tag.artist().as_deref(), Some("Artist"));
    assert_eq!(tag.album().as_deref(), Some("Live Set"));
    assert_eq!(tag.title().as_deref(), Some("Title"));
}

#[test]
fn export_honours_float_samples_and_id3v2_tags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.wav");
    let tags = TrackTags {
        artist: "A".to_string(),
        album: "B".to_string(),
        title: "C".to_string(),
    };
    let settings = OutputSettings {
        sample_format: SampleFormatSetting::Float32,
        tag_format: TagFormatSetting::Id3v2,
        ..OutputSettings::default()
    };

    flat_recording(500)
        .slice(0, 500)
        .export(&path, &tags, &settings)
        .unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_format, SampleFormat::Float);

    let tagged = lofty::read_from_path(&path).unwrap();
    let tag = tagged.tag(TagType::Id3v2).expect("ID3v2 tag");
    assert_eq!(tag.title().as_deref(), Some("C"));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("out.wav");
    let tags = TrackTags {
        artist: "A".to_string(),
        album: "B".to_string(),
        title: "C".to_string(),
    };
    let err = flat_recording(100)
        .slice(0, 100)
        .export(&path, &tags, &OutputSettings::default())
        .unwrap_err();
    assert!(matches!(err, SplitError::Encode(_) | SplitError::Io(_)));
}

#[test]
fn short_decode_is_detected_against_reported_length() {
    let ten_seconds = Some(Duration::from_secs(10));
    assert_eq!(missing_frames(40_000, ten_seconds, 8_000), Some(40_000));
    assert_eq!(missing_frames(80_000, ten_seconds, 8_000), None);
    // Rounding in the container's duration is not a short decode.
    assert_eq!(missing_frames(79_990, ten_seconds, 8_000), None);
    assert_eq!(missing_frames(10, None, 8_000), None);
}
