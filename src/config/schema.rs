use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracksplit/config.toml` or `~/.config/tracksplit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKSPLIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub split: SplitSettings,
    pub tracklist: TrackListSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    /// Fade-out applied to the tail of every exported track (milliseconds).
    /// Set to 0 to disable.
    pub fade_out_ms: u64,
    /// How much to cut from the end of the recording for the last track (milliseconds).
    pub tail_trim_ms: u64,
    /// Track lists shorter than this are exported on the calling thread.
    pub serial_threshold: usize,
    /// Workers spawned per available CPU when exporting concurrently.
    pub workers_per_core: usize,
    /// Fixed worker count; overrides `workers_per_core` when set.
    pub workers: Option<usize>,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            fade_out_ms: 1_000,
            tail_trim_ms: 100,
            serial_threshold: 3,
            workers_per_core: 2,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackListSettings {
    /// Whether the first CSV row is a header to skip.
    pub has_headers: bool,
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: char,
}

impl Default for TrackListSettings {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: ',',
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the `<album>` folder is created in.
    pub root: PathBuf,
    pub sample_format: SampleFormatSetting,
    pub tag_format: TagFormatSetting,
    /// What to do when two tracks map to the same file name.
    pub on_collision: CollisionPolicy,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sample_format: SampleFormatSetting::Int16,
            tag_format: TagFormatSetting::RiffInfo,
            on_collision: CollisionPolicy::Error,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleFormatSetting {
    #[serde(alias = "i16", alias = "pcm16")]
    Int16,
    #[serde(alias = "f32")]
    Float32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagFormatSetting {
    #[serde(alias = "riff", alias = "riff_info", alias = "info")]
    RiffInfo,
    #[serde(alias = "id3")]
    Id3v2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Refuse to start exporting.
    Error,
    /// Append ` (2)`, ` (3)`, ... to later duplicates.
    #[serde(alias = "dedupe")]
    Suffix,
    /// Let the later export replace the earlier file.
    Overwrite,
}
