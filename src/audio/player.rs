use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::config::AudioSettings;

use super::error::AudioError;
use super::resource::AudioResource;
use super::sink::resolve_source;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, Session, TrackInfo, TrackInfoHandle};

/// `AudioResource` backed by a `rodio` output stream on its own thread.
pub struct RodioResource {
    tx: Sender<AudioCmd>,
    info: TrackInfoHandle,
    media_dir: PathBuf,
    quit_fade_out: Duration,
    join: Option<JoinHandle<()>>,
}

impl RodioResource {
    pub fn new(settings: &AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let info: TrackInfoHandle = Arc::new(Mutex::new(TrackInfo::default()));

        let join = spawn_audio_thread(
            rx,
            info.clone(),
            Duration::from_millis(settings.tick_ms.max(1)),
        );

        Self {
            tx,
            info,
            media_dir: settings.media_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            quit_fade_out: Duration::from_millis(settings.quit_fade_out_ms),
            join: Some(join),
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), AudioError> {
        self.tx.send(cmd).map_err(|_| AudioError::Disconnected)
    }

    /// Fade out, stop the audio thread and wait for it.
    pub fn shutdown(&mut self) {
        let Some(join) = self.join.take() else {
            return;
        };
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: self.quit_fade_out.as_millis() as u64,
        });
        let _ = join.join();
    }
}

impl Drop for RodioResource {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl AudioResource for RodioResource {
    fn subscribe(&mut self, events: Sender<AudioEvent>) {
        let _ = self.send(AudioCmd::Subscribe(events));
    }

    fn unsubscribe(&mut self) {
        let _ = self.send(AudioCmd::Unsubscribe);
    }

    fn load(&mut self, session: Session, source: &str) -> Result<(), AudioError> {
        // Forget the old length right away so a seek can't use it.
        if let Ok(mut info) = self.info.lock() {
            *info = TrackInfo {
                session,
                total: None,
            };
        }
        let path = resolve_source(&self.media_dir, source);
        debug!(?session, path = %path.display(), "loading track");
        self.send(AudioCmd::Load { session, path })
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) {
        let _ = self.send(AudioCmd::Pause);
    }

    fn set_volume(&mut self, level: f32) {
        let _ = self.send(AudioCmd::SetVolume(level.clamp(0.0, 1.0)));
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.send(AudioCmd::Seek(position))
    }

    fn duration(&self) -> Option<Duration> {
        self.info.lock().ok().and_then(|info| info.total)
    }
}
