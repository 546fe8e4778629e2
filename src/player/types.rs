//! Playback-related small types and handles.
//!
//! This module defines the loop mode and its single transition table, the
//! command enum accepted by the engine thread, and the shared playback
//! snapshot handed to the UI.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::metadata::CoverArt;

/// Policy for what plays after the current track completes naturally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop at the end of the playlist.
    NoLoop,
    /// Wrap around to the start of the playlist.
    LoopAll,
    /// Repeat the current track when it ends.
    LoopOne,
}

impl Default for LoopMode {
    fn default() -> Self {
        Self::NoLoop
    }
}

impl LoopMode {
    /// Successor in the toggle cycle.
    ///
    /// Single source of truth for the cycle order: both the loop button and
    /// the track-finished handler read this table.
    pub fn next(self) -> Self {
        match self {
            Self::NoLoop => Self::LoopAll,
            Self::LoopAll => Self::LoopOne,
            Self::LoopOne => Self::NoLoop,
        }
    }

    /// Label shown on the loop button.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoLoop => "No Loop",
            Self::LoopAll => "Loop All",
            Self::LoopOne => "Loop One",
        }
    }
}

/// The playback state of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// User intents forwarded to the engine thread.
#[derive(Debug)]
pub enum PlayerCmd {
    /// Append files to the playlist; auto-starts when it was empty.
    AddTracks(Vec<PathBuf>),
    /// Start playing the playlist entry at the given index.
    PlayIndex(usize),
    /// Open and play a single file outside the playlist.
    PlayFile(PathBuf),
    /// Toggle pause/resume; no-op when stopped.
    TogglePause,
    /// Tear down the current session.
    Stop,
    /// Set the device volume, clamped to `[0.0, 1.0]`.
    SetVolume(f32),
    /// Seek to an absolute position in seconds (suppressed during a drag).
    Seek(f64),
    /// The user grabbed the seek slider.
    BeginSeekDrag,
    /// The user released the seek slider at the given position in seconds.
    EndSeekDrag(f64),
    /// Advance the loop mode one step in its cycle.
    CycleLoopMode,
    /// Stop playback and shut the engine thread down.
    Quit,
}

/// Runtime playback snapshot shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Playlist index of the active session (if any).
    pub index: Option<usize>,
    /// Title of the active track; empty when idle.
    pub title: String,
    /// Artist of the active track; empty when idle.
    pub artist: String,
    /// Cover art of the active track.
    pub cover: CoverArt,
    /// Whether the engine is stopped, playing or paused.
    pub state: PlaybackState,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total duration of the current track, when known.
    pub duration: Option<Duration>,
    /// Current loop mode.
    pub loop_mode: LoopMode,
    /// Current volume in `[0.0, 1.0]`.
    pub volume: f32,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            title: String::new(),
            artist: String::new(),
            cover: CoverArt::Fallback,
            state: PlaybackState::Stopped,
            elapsed: Duration::ZERO,
            duration: None,
            loop_mode: LoopMode::default(),
            volume: 1.0,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
