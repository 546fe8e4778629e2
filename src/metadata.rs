use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use tracing::debug;

use crate::error::MetadataError;

/// Artist shown when the file carries no artist tag.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Cover art attached to a track.
///
/// The engine never ships image assets of its own; when a file has no
/// embedded picture the UI substitutes its bundled placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverArt {
    /// Raw bytes of the first embedded picture in the file.
    Embedded(Vec<u8>),
    /// No embedded picture; render the placeholder.
    Fallback,
}

/// Display metadata for one track, derived on demand and never cached.
#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub cover: CoverArt,
    pub duration: Option<Duration>,
}

impl TrackInfo {
    /// Filename-derived metadata used when the file's tags are unreadable.
    pub fn fallback(path: &Path) -> Self {
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        Self {
            title,
            artist: UNKNOWN_ARTIST.to_string(),
            cover: CoverArt::Fallback,
            duration: None,
        }
    }
}

/// Read title, artist, cover art and duration from `path`.
///
/// Absent or blank tag fields fall back to the file stem / [`UNKNOWN_ARTIST`] /
/// [`CoverArt::Fallback`]; a readable audio file never errors here. When the
/// file carries several pictures the first one wins. Only an unreadable or
/// non-audio file yields [`MetadataError`].
pub fn extract(path: &Path) -> Result<TrackInfo, MetadataError> {
    let tagged = lofty::read_from_path(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut info = TrackInfo::fallback(path);
    info.duration = Some(tagged.properties().duration());

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
            if !v.trim().is_empty() {
                info.title = v.trim().to_string();
            }
        }
        if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
            if !v.trim().is_empty() {
                info.artist = v.trim().to_string();
            }
        }
        if let Some(pic) = tag.pictures().first() {
            info.cover = CoverArt::Embedded(pic.data().to_vec());
        }
    } else {
        debug!("no tags in {}, using filename fallbacks", path.display());
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Smallest valid RIFF/WAVE file: PCM format chunk plus a one-sample data
    // chunk (lofty rejects a zero-byte data chunk as "no data chunk").
    fn minimal_wav() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&38u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44100u32.to_le_bytes());
        bytes.extend_from_slice(&88200u32.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&0i16.to_le_bytes());
        bytes
    }

    #[test]
    fn fallback_uses_file_stem_and_placeholder_fields() {
        let info = TrackInfo::fallback(Path::new("/music/Blue in Green.mp3"));
        assert_eq!(info.title, "Blue in Green");
        assert_eq!(info.artist, UNKNOWN_ARTIST);
        assert_eq!(info.cover, CoverArt::Fallback);
        assert_eq!(info.duration, None);
    }

    #[test]
    fn extract_untagged_audio_falls_back_without_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("untitled take.wav");
        fs::write(&path, minimal_wav()).unwrap();

        let info = extract(&path).unwrap();
        assert_eq!(info.title, "untitled take");
        assert_eq!(info.artist, UNKNOWN_ARTIST);
        assert_eq!(info.cover, CoverArt::Fallback);
        assert!(info.duration.is_some());
    }

    #[test]
    fn extract_non_audio_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not audio at all").unwrap();

        assert!(extract(&path).is_err());
    }

    #[test]
    fn extract_missing_file_is_an_error() {
        assert!(extract(Path::new("/definitely/not/here.mp3")).is_err());
    }
}
