//! The playback controller: owns the output port, the playlist and the loop
//! mode, and decides what plays next.
//!
//! All mutation happens on whatever single thread owns the controller; the
//! engine thread in this crate, or a test body. The completion notification
//! must be delivered by that owner via [`Controller::on_track_finished`],
//! never from the audio subsystem's own thread.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::MediaLoadError;
use crate::metadata::{self, TrackInfo};
use crate::output::AudioOutput;
use crate::playlist::Playlist;

use super::types::{LoopMode, PlaybackState};

pub struct Controller<O: AudioOutput> {
    output: O,
    playlist: Playlist,
    /// Playlist position of the active session; `None` when the last load
    /// was not a playlist entry or nothing was ever played.
    current: Option<usize>,
    loop_mode: LoopMode,
    volume: f32,
    state: PlaybackState,
    now_playing: Option<TrackInfo>,
    seek_dragging: bool,
}

impl<O: AudioOutput> Controller<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            playlist: Playlist::new(),
            current: None,
            loop_mode: LoopMode::default(),
            volume: 1.0,
            state: PlaybackState::Stopped,
            now_playing: None,
            seek_dragging: false,
        }
    }

    /// Tear down any current session and start playing `path`.
    ///
    /// Missing or corrupt tags never fail the load; the track plays with
    /// filename-derived metadata instead. A decode failure leaves the
    /// engine idle, with the previous session already released.
    pub fn load_and_play(&mut self, path: &Path) -> Result<(), MediaLoadError> {
        self.stop();
        self.current = None;

        let info = match metadata::extract(path) {
            Ok(info) => info,
            Err(err) => {
                warn!("{err}; falling back to filename metadata");
                TrackInfo::fallback(path)
            }
        };

        self.output.load(path)?;
        self.output.set_volume(self.volume);
        self.output.play();

        self.now_playing = Some(info);
        self.state = PlaybackState::Playing;
        debug!("playing {}", path.display());
        Ok(())
    }

    /// Start playing the playlist entry at `index`.
    ///
    /// Out-of-range indices are a silent no-op: this is driven by internal
    /// index arithmetic (auto-advance, UI selection) that must never blow up
    /// on a stale index, not a user-visible error.
    pub fn play_from_playlist(&mut self, index: usize) -> Result<(), MediaLoadError> {
        let Some(path) = self.playlist.get(index).map(Path::to_path_buf) else {
            return Ok(());
        };

        self.load_and_play(&path)?;
        self.current = Some(index);
        Ok(())
    }

    /// Append `paths` to the playlist in argument order.
    ///
    /// The first tracks added to an empty playlist start playing right away;
    /// anything added later must not interrupt the current session.
    pub fn add_tracks(&mut self, paths: Vec<PathBuf>) -> Result<(), MediaLoadError> {
        let was_empty = self.playlist.is_empty();
        self.playlist.extend(paths);

        if was_empty && self.current.is_none() && !self.playlist.is_empty() {
            self.play_from_playlist(0)?;
        }
        Ok(())
    }

    /// Pause a playing session or resume a paused one; no-op when stopped.
    pub fn pause_toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.output.pause();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                self.output.resume();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Stopped => {}
        }
    }

    /// Tear down the session unconditionally. Idempotent.
    ///
    /// The playlist position is kept so the UI selection survives a stop;
    /// only a natural end-of-track triggers auto-advance, never this.
    pub fn stop(&mut self) {
        self.output.stop();
        self.state = PlaybackState::Stopped;
        self.now_playing = None;
    }

    /// Set the volume, clamped to `[0.0, 1.0]`.
    ///
    /// Always stored, so a session loaded later inherits it; propagated to
    /// the device only while a session exists.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if self.state != PlaybackState::Stopped {
            self.output.set_volume(self.volume);
        }
    }

    /// The user grabbed the seek slider; suppress program-driven seeks.
    pub fn begin_seek_drag(&mut self) {
        self.seek_dragging = true;
    }

    /// Seek from the continuous position-changed path.
    ///
    /// Ignored while a drag is in progress, so the program-controlled time
    /// advance cannot fight the user's gesture.
    pub fn seek(&mut self, seconds: f64) {
        if self.seek_dragging {
            return;
        }
        self.seek_clamped(seconds);
    }

    /// The user released the seek slider; always honored.
    pub fn end_seek_drag(&mut self, seconds: f64) {
        self.seek_dragging = false;
        self.seek_clamped(seconds);
    }

    fn seek_clamped(&mut self, seconds: f64) {
        if self.state == PlaybackState::Stopped {
            return;
        }
        // Sliders can hand over anything, including NaN and infinities;
        // unrepresentable values clamp to an end of the track.
        let mut target = match Duration::try_from_secs_f64(seconds) {
            Ok(target) => target,
            Err(_) if seconds > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        };
        if let Some(total) = self.output.duration() {
            target = target.min(total);
        }
        self.output.seek_to(target);
    }

    /// Advance the loop mode one step in its cycle.
    ///
    /// Pure state change; the active session is not touched.
    pub fn cycle_loop_mode(&mut self) {
        self.loop_mode = self.loop_mode.next();
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    /// Handle a natural end-of-track and decide what plays next.
    ///
    /// Must be invoked on the controller's owning thread; the audio
    /// subsystem's completion signal is marshaled there first. Explicit
    /// `stop` never lands here; that asymmetry is intentional.
    pub fn on_track_finished(&mut self) -> Result<(), MediaLoadError> {
        let Some(current) = self.current else {
            // A one-off file (or nothing) was playing; just release it.
            self.stop();
            return Ok(());
        };

        match self.loop_mode {
            LoopMode::LoopOne => self.play_from_playlist(current),
            LoopMode::LoopAll => {
                if self.playlist.is_empty() {
                    return Ok(());
                }
                self.play_from_playlist((current + 1) % self.playlist.len())
            }
            LoopMode::NoLoop => {
                if current + 1 < self.playlist.len() {
                    self.play_from_playlist(current + 1)
                } else {
                    // End of playlist: release the session, keep the cursor.
                    self.stop();
                    Ok(())
                }
            }
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Metadata of the active track, if a session exists.
    pub fn now_playing(&self) -> Option<&TrackInfo> {
        self.now_playing.as_ref()
    }

    pub fn position(&self) -> Duration {
        self.output.position()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.output.duration()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Whether the output drained the current session to its natural end.
    pub fn finished(&self) -> bool {
        self.output.finished()
    }
}
