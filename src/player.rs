//! Playback engine: the controller state machine, the owning thread that
//! drives it, and the shared playback snapshot read by the UI.

mod controller;
mod engine;
mod thread;
mod types;

pub use controller::Controller;
pub use engine::Player;
pub use types::{LoopMode, PlaybackHandle, PlaybackInfo, PlaybackState, PlayerCmd};
