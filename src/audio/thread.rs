use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, warn};

use super::error::AudioError;
use super::sink::{fade_out_sink, open_track};
use super::types::{AudioCmd, AudioEvent, Session, TrackInfoHandle};

/// The track currently owned by the audio thread.
struct Loaded {
    session: Session,
    sink: Sink,
    total: Option<Duration>,
}

/// State owned by the audio thread.
pub(super) struct AudioThread {
    stream: Option<OutputStream>,
    info: TrackInfoHandle,
    subscriber: Option<Sender<AudioEvent>>,
    current: Option<Loaded>,
    /// Session of the most recent load request, even if it failed.
    requested: Session,
    playing: bool,
    volume: f32,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    info: TrackInfoHandle,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in
                // debugging, but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                error!(error = %e, "failed to open the default audio output");
                None
            }
        };

        let mut audio = AudioThread::new(stream, info);

        let mut last_tick = Instant::now();
        loop {
            let wait = tick.saturating_sub(last_tick.elapsed());
            match rx.recv_timeout(wait) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    audio.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => audio.handle(cmd),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // Commands may keep arriving faster than `tick`; report on wall time.
            if last_tick.elapsed() >= tick {
                audio.report_progress();
                last_tick = Instant::now();
            }
        }
        debug!("audio thread stopped");
    })
}

impl AudioThread {
    /// Without a `stream` every load fails with `NoOutputDevice`.
    pub(super) fn new(stream: Option<OutputStream>, info: TrackInfoHandle) -> Self {
        Self {
            stream,
            info,
            subscriber: None,
            current: None,
            requested: Session::default(),
            playing: false,
            volume: 1.0,
        }
    }

    /// Install an already drained track as if it had been loaded and played.
    #[cfg(test)]
    pub(super) fn play_drained(&mut self, session: Session) {
        let (sink, _queue) = Sink::new();
        self.current = Some(Loaded {
            session,
            sink,
            total: None,
        });
        self.requested = session;
        self.playing = true;
    }

    pub(super) fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Subscribe(tx) => self.subscriber = Some(tx),
            AudioCmd::Unsubscribe => self.subscriber = None,
            AudioCmd::Load { session, path } => {
                if let Some(old) = self.current.take() {
                    old.sink.stop();
                }
                self.playing = false;
                self.requested = session;

                let opened = match self.stream.as_ref() {
                    Some(stream) => open_track(stream, &path, self.volume),
                    None => Err(AudioError::NoOutputDevice),
                };
                match opened {
                    Ok(track) => {
                        debug!(path = %path.display(), total = ?track.total, "track loaded");
                        if let Ok(mut info) = self.info.lock() {
                            if info.session == session {
                                info.total = track.total;
                            }
                        }
                        self.current = Some(Loaded {
                            session,
                            sink: track.sink,
                            total: track.total,
                        });
                    }
                    Err(e) => self.fail(session, &e),
                }
            }
            AudioCmd::Play => match self.current.as_ref() {
                Some(track) => {
                    track.sink.play();
                    self.playing = true;
                }
                None => self.fail(self.requested, &AudioError::NotLoaded),
            },
            AudioCmd::Pause => {
                if let Some(track) = self.current.as_ref() {
                    track.sink.pause();
                }
                self.playing = false;
            }
            AudioCmd::SetVolume(level) => {
                self.volume = level;
                if let Some(track) = self.current.as_ref() {
                    track.sink.set_volume(level);
                }
            }
            AudioCmd::Seek(position) => {
                if let Some(track) = self.current.as_ref() {
                    if let Err(e) = track.sink.try_seek(position) {
                        warn!(error = %e, ?position, "seek failed");
                    }
                }
            }
            AudioCmd::Quit { .. } => {}
        }
    }

    /// Emit a time update, or `Ended` once the sink has drained.
    pub(super) fn report_progress(&mut self) {
        if !self.playing {
            return;
        }
        let Some(track) = self.current.as_ref() else {
            return;
        };

        let event = if track.sink.empty() {
            // Stop reporting until the next load/play.
            self.playing = false;
            AudioEvent::Ended {
                session: track.session,
            }
        } else {
            AudioEvent::TimeUpdate {
                session: track.session,
                elapsed: track.sink.get_pos(),
                total: track.total.unwrap_or(Duration::ZERO),
            }
        };
        self.emit(event);
    }

    fn fail(&mut self, session: Session, err: &AudioError) {
        warn!(error = %err, "playback failed");
        self.emit(AudioEvent::Failed {
            session,
            message: err.to_string(),
        });
    }

    fn emit(&mut self, event: AudioEvent) {
        if let Some(tx) = self.subscriber.as_ref() {
            if tx.send(event).is_err() {
                // Receiver went away without unsubscribing.
                self.subscriber = None;
            }
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(track) = self.current.take() {
            if self.playing {
                fade_out_sink(&track.sink, self.volume, fade_out_ms);
            }
            track.sink.stop();
        }
        self.playing = false;
    }
}
