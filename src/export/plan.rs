use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::warn;

use crate::config::CollisionPolicy;
use crate::error::{Result, SplitError};
use crate::tracklist::Track;

pub const OUTPUT_EXTENSION: &str = "wav";

/// A track paired with the file it will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExport<'a> {
    pub track: &'a Track,
    pub path: PathBuf,
}

/// Resolve `<dir>/<artist> - <title>.wav` for every track, in order.
///
/// Tracks that share an artist and title are handled per `policy`.
pub fn plan_outputs<'a>(
    tracks: &'a [Track],
    dir: &Path,
    policy: CollisionPolicy,
) -> Result<Vec<PlannedExport<'a>>> {
    let mut taken: HashSet<String> = HashSet::with_capacity(tracks.len());
    let mut planned = Vec::with_capacity(tracks.len());

    for track in tracks {
        let stem = format!("{} - {}", track.artist, track.title);
        let mut file_name = format!("{stem}.{OUTPUT_EXTENSION}");

        if taken.contains(&file_name) {
            match policy {
                CollisionPolicy::Error => {
                    return Err(SplitError::DuplicateOutput {
                        path: dir.join(file_name),
                    });
                }
                CollisionPolicy::Suffix => {
                    let mut n = 2;
                    while taken.contains(&file_name) {
                        file_name = format!("{stem} ({n}).{OUTPUT_EXTENSION}");
                        n += 1;
                    }
                    warn!("Duplicate track '{stem}' will be written as '{file_name}'");
                }
                CollisionPolicy::Overwrite => {
                    warn!("Duplicate track '{stem}'; one export will overwrite the other");
                }
            }
        }

        taken.insert(file_name.clone());
        planned.push(PlannedExport {
            track,
            path: dir.join(file_name),
        });
    }

    Ok(planned)
}
