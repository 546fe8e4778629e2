use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::MediaLoadError;
use crate::metadata::CoverArt;
use crate::output::{AudioOutput, RodioOutput};

use super::controller::Controller;
use super::types::{PlaybackHandle, PlayerCmd};

pub(super) fn spawn_player_thread(
    rx: Receiver<PlayerCmd>,
    playback_info: PlaybackHandle,
    settings: Settings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // The stream must be opened on this thread: it is not Send, and this
        // thread is the single owner of all playback state anyway.
        let output = match RodioOutput::open_default() {
            Ok(output) => output,
            Err(err) => {
                warn!("{err}; playback engine not started");
                return;
            }
        };

        let mut controller = Controller::new(output);
        controller.set_loop_mode(settings.playback.loop_mode.into());
        controller.set_volume(settings.playback.volume);

        let poll = Duration::from_millis(settings.engine.poll_ms.max(1));

        loop {
            match rx.recv_timeout(poll) {
                Ok(cmd) => {
                    let quitting = matches!(cmd, PlayerCmd::Quit);
                    if let Err(err) = handle_cmd(&mut controller, cmd) {
                        // A failed load requires a new explicit user action;
                        // the engine stays usable.
                        warn!("{err}");
                    }
                    publish(&controller, &playback_info);
                    if quitting {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    // The completion notification is observed here, on the
                    // owning thread, never on rodio's mixer thread.
                    if controller.is_playing() && controller.finished() {
                        if let Err(err) = controller.on_track_finished() {
                            warn!("auto-advance failed: {err}");
                        }
                    }
                    publish(&controller, &playback_info);
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        controller.stop();
        publish(&controller, &playback_info);
        debug!("playback engine stopped");
    })
}

/// Apply one UI intent to the controller.
pub(super) fn handle_cmd<O: AudioOutput>(
    controller: &mut Controller<O>,
    cmd: PlayerCmd,
) -> Result<(), MediaLoadError> {
    match cmd {
        PlayerCmd::AddTracks(paths) => controller.add_tracks(paths),
        PlayerCmd::PlayIndex(index) => controller.play_from_playlist(index),
        PlayerCmd::PlayFile(path) => controller.load_and_play(&path),
        PlayerCmd::TogglePause => {
            controller.pause_toggle();
            Ok(())
        }
        PlayerCmd::Stop | PlayerCmd::Quit => {
            controller.stop();
            Ok(())
        }
        PlayerCmd::SetVolume(volume) => {
            controller.set_volume(volume);
            Ok(())
        }
        PlayerCmd::Seek(seconds) => {
            controller.seek(seconds);
            Ok(())
        }
        PlayerCmd::BeginSeekDrag => {
            controller.begin_seek_drag();
            Ok(())
        }
        PlayerCmd::EndSeekDrag(seconds) => {
            controller.end_seek_drag(seconds);
            Ok(())
        }
        PlayerCmd::CycleLoopMode => {
            controller.cycle_loop_mode();
            Ok(())
        }
    }
}

/// Copy the controller's observable state into the shared snapshot.
pub(super) fn publish<O: AudioOutput>(controller: &Controller<O>, handle: &PlaybackHandle) {
    if let Ok(mut info) = handle.lock() {
        info.index = controller.current_index();
        info.state = controller.state();
        info.elapsed = controller.position();
        info.duration = controller.duration();
        info.loop_mode = controller.loop_mode();
        info.volume = controller.volume();

        match controller.now_playing() {
            Some(track) => {
                info.title = track.title.clone();
                info.artist = track.artist.clone();
                info.cover = track.cover.clone();
            }
            None => {
                info.title.clear();
                info.artist.clear();
                info.cover = CoverArt::Fallback;
            }
        }
    }
}
