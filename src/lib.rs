//! Playback and playlist engine for a small desktop music player.
//!
//! The UI layer (windows, file dialogs, sliders, artwork) is an external
//! collaborator: it forwards user intents to the engine and polls the shared
//! playback snapshot to refresh its display. Everything with actual playback
//! logic lives here:
//!
//! - [`player::Controller`]: the single-threaded state machine that owns the
//!   output device, the playlist and the loop mode, and decides what plays
//!   next when a track ends.
//! - [`player::Player`]: runs the controller on a dedicated engine thread,
//!   accepts [`player::PlayerCmd`] intents over a channel and publishes a
//!   [`player::PlaybackInfo`] snapshot.
//! - [`output`]: the audio output port and its rodio implementation.
//! - [`metadata`]: on-demand tag extraction with filename fallbacks.
//! - [`playlist`]: the append-only track list.
//! - [`config`]: startup defaults loaded from TOML and environment.
//!
//! ```no_run
//! use tonearm::config::Settings;
//! use tonearm::player::{Player, PlayerCmd};
//!
//! let player = Player::new(Settings::load_or_default());
//! player
//!     .send(PlayerCmd::AddTracks(vec!["song.mp3".into()]))
//!     .unwrap();
//! let info = player.playback_handle();
//! // UI: read `info` each frame, send more commands on user input.
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod output;
pub mod player;
pub mod playlist;

pub use error::{MediaLoadError, MetadataError};
pub use metadata::{CoverArt, TrackInfo};
pub use player::{Controller, LoopMode, PlaybackInfo, PlaybackState, Player, PlayerCmd};
pub use playlist::Playlist;
