//! Error types shared across the engine.
//!
//! Load failures surface to the caller; tag-read failures are recovered
//! locally with fallback values and never abort a load.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file path into a live playback session.
///
/// A failed load leaves the engine idle: the previous session is already
/// torn down before the new file is touched.
#[derive(Debug, Error)]
pub enum MediaLoadError {
    /// The file could not be opened at all.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but could not be decoded as audio.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// No usable audio output device.
    #[error("audio output unavailable: {0}")]
    Device(#[from] rodio::StreamError),
}

/// Failure to read tags from a file.
///
/// Only an unreadable or non-audio file produces this; a readable audio
/// file with absent or corrupt tags yields fallback values instead.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read tags from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
}
