use std::path::Path;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::{Tag, TagType};

use crate::config::TagFormatSetting;
use crate::error::Result;

/// The metadata written into every exported track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
    pub title: String,
}

impl TrackTags {
    /// Save the tags into the existing audio file at `path`.
    pub fn write_to(&self, path: &Path, format: TagFormatSetting) -> Result<()> {
        let tag_type = match format {
            TagFormatSetting::RiffInfo => TagType::RiffInfo,
            TagFormatSetting::Id3v2 => TagType::Id3v2,
        };

        let mut tag = Tag::new(tag_type);
        tag.set_artist(self.artist.clone());
        tag.set_album(self.album.clone());
        tag.set_title(self.title.clone());
        tag.save_to_path(path, WriteOptions::default())?;
        Ok(())
    }
}
