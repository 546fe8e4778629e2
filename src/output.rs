//! Audio output port: the seam between the controller and the audio device.
//!
//! The controller only ever talks to [`AudioOutput`]; [`RodioOutput`] is the
//! real implementation, tests drive the controller through a fake.

mod device;

pub use device::RodioOutput;

use std::path::Path;
use std::time::Duration;

use crate::error::MediaLoadError;

/// One output device managing at most one live session at a time.
///
/// Loading a new file implicitly tears down whatever was playing before;
/// every other method is a no-op when no session is loaded.
pub trait AudioOutput {
    /// Open and decode `path`, leaving the new session paused at the start.
    fn load(&mut self, path: &Path) -> Result<(), MediaLoadError>;
    /// Start the loaded session.
    fn play(&mut self);
    /// Pause the running session.
    fn pause(&mut self);
    /// Resume a paused session.
    fn resume(&mut self);
    /// Tear down the session and release the decoder.
    fn stop(&mut self);
    /// Apply `volume` to the device; retained for sessions loaded later.
    fn set_volume(&mut self, volume: f32);
    /// Elapsed playback time of the current session.
    fn position(&self) -> Duration;
    /// Jump to an absolute position within the current session.
    fn seek_to(&mut self, position: Duration);
    /// Total track duration, when the decoder knows it.
    fn duration(&self) -> Option<Duration>;
    /// True once the current session played through to its natural end.
    fn finished(&self) -> bool;
}
