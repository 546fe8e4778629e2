use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::Settings;

use super::thread::spawn_player_thread;
use super::types::{PlaybackHandle, PlaybackInfo, PlayerCmd};

/// Handle to the playback engine running on its own thread.
///
/// The UI sends intents through [`Player::send`] and reads the shared
/// [`PlaybackInfo`] snapshot to refresh its display; all playback state
/// lives on the engine thread.
pub struct Player {
    tx: Sender<PlayerCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    pub fn new(settings: Settings) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let handle = spawn_player_thread(rx, playback_info.clone(), settings);

        Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(handle)),
        }
    }

    /// Shared snapshot the UI polls for now-playing state.
    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<(), mpsc::SendError<PlayerCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback, shut the engine thread down and wait for it.
    pub fn quit(&self) {
        let _ = self.send(PlayerCmd::Quit);

        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.quit();
    }
}
