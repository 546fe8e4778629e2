//! Rodio-backed implementation of the output port.
//!
//! One `OutputStream` is opened for the lifetime of the engine; each loaded
//! track gets a fresh `Sink` connected to its mixer. Seeking rebuilds the
//! sink and skips into the file, and elapsed time is tracked by wall clock
//! (started-at plus accumulated) across pause/resume/seek.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::warn;

use super::AudioOutput;
use crate::error::MediaLoadError;

pub struct RodioOutput {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    duration: Option<Duration>,
    volume: f32,
    paused: bool,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl RodioOutput {
    /// Open the system default output device.
    pub fn open_default() -> Result<Self, MediaLoadError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a host application.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
            duration: None,
            volume: 1.0,
            paused: false,
            started_at: None,
            accumulated: Duration::ZERO,
        })
    }

    /// Create a paused `Sink` for `path` that starts playback at `start_at`.
    fn build_sink(
        &self,
        path: &Path,
        start_at: Duration,
    ) -> Result<(Sink, Option<Duration>), MediaLoadError> {
        let file = File::open(path).map_err(|source| MediaLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let source =
            Decoder::new(BufReader::new(file)).map_err(|source| MediaLoadError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        let duration = source.total_duration();

        // `skip_duration` is the seeking primitive; even Duration::ZERO is fine.
        let source = source.skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok((sink, duration))
    }

    fn drop_sink(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

impl AudioOutput for RodioOutput {
    fn load(&mut self, path: &Path) -> Result<(), MediaLoadError> {
        self.drop_sink();
        let (sink, duration) = self.build_sink(path, Duration::ZERO)?;

        self.sink = Some(sink);
        self.path = Some(path.to_path_buf());
        self.duration = duration;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
            self.paused = false;
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
            if let Some(started) = self.started_at.take() {
                self.accumulated += started.elapsed();
            }
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
            self.paused = false;
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        self.drop_sink();
        self.path = None;
        self.duration = None;
        self.paused = false;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(volume);
        }
    }

    fn position(&self) -> Duration {
        let elapsed = self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |started| started.elapsed());
        clamp_elapsed(elapsed, self.duration)
    }

    fn seek_to(&mut self, position: Duration) {
        // Scrubbing: rebuild the sink and skip into the file.
        let Some(path) = self.path.clone() else {
            return;
        };
        self.drop_sink();

        match self.build_sink(&path, position) {
            Ok((sink, duration)) => {
                if self.paused {
                    self.started_at = None;
                } else {
                    sink.play();
                    self.started_at = Some(Instant::now());
                }
                self.sink = Some(sink);
                self.duration = duration;
                self.accumulated = position;
            }
            Err(err) => {
                // The file disappeared mid-session; nothing left to play.
                warn!("seek failed for {}: {err}", path.display());
                self.stop();
            }
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn finished(&self) -> bool {
        !self.paused && self.sink.as_ref().is_some_and(|sink| sink.empty())
    }
}

/// Cap wall-clock elapsed time at the track duration when it is known.
///
/// The clock keeps running between the sink draining and the next
/// completion poll; without the cap the reported position can overshoot
/// the track length by up to one poll interval.
fn clamp_elapsed(elapsed: Duration, total: Option<Duration>) -> Duration {
    match total {
        Some(total) => elapsed.min(total),
        None => elapsed,
    }
}
