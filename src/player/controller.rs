use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::audio::{AudioEvent, AudioResource, Session};
use crate::playlist::{Playlist, Track};

use super::state::{PlaybackState, format_clock, progress_of};

pub struct PlaybackController<R: AudioResource> {
    playlist: Playlist,
    resource: R,
    state: PlaybackState,
    /// Session of the track currently loaded into `resource`.
    session: Session,
    events: Receiver<AudioEvent>,
}

impl<R: AudioResource> PlaybackController<R> {
    /// Mount the controller: subscribe to `resource`, apply the initial volume
    /// and preload the first track without playing it.
    pub fn new(playlist: Playlist, mut resource: R, initial_volume: u8) -> Self {
        let (tx, rx) = mpsc::channel::<AudioEvent>();
        resource.subscribe(tx);

        let mut controller = Self {
            playlist,
            resource,
            state: PlaybackState::new(initial_volume),
            session: Session::default(),
            events: rx,
        };
        controller.set_volume(i32::from(controller.state.volume_percent));
        controller.load_current();
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.get(self.state.current_index)
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> Session {
        self.session
    }

    #[cfg(test)]
    pub(crate) fn resource(&self) -> &R {
        &self.resource
    }

    #[cfg(test)]
    pub(crate) fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    /// Flip between playing and paused on the current track.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.state.is_playing = false;
            self.resource.pause();
            info!(track = %self.current_track().name, "paused");
        } else {
            self.state.is_playing = true;
            self.start();
        }
    }

    /// Skip forward, wrapping to the first track, and play.
    pub fn next_track(&mut self) {
        let index = self.playlist.next_index(self.state.current_index);
        self.skip_to(index);
    }

    /// Skip backward, wrapping to the last track, and play.
    pub fn previous_track(&mut self) {
        let index = self.playlist.prev_index(self.state.current_index);
        self.skip_to(index);
    }

    /// The current track finished on its own.
    pub fn on_track_ended(&mut self) {
        self.next_track();
    }

    /// Jump to `target_percent` of the track. No-op until the length is known.
    pub fn seek_to(&mut self, target_percent: f64) {
        if !target_percent.is_finite() {
            return;
        }
        let target = target_percent.clamp(0.0, 100.0);
        let Some(total) = self.resource.duration().filter(|d| !d.is_zero()) else {
            debug!(target, "seek ignored, track length unknown");
            return;
        };

        let position = total.mul_f64(target / 100.0);
        if let Err(e) = self.resource.seek(position) {
            warn!(error = %e, ?position, "seek failed");
        }
        // Optimistic; the next time update corrects it.
        self.state.progress_percent = target;
        self.state.elapsed_label = format_clock(position);
    }

    /// Set the volume, clamped into `0..=100`.
    pub fn set_volume(&mut self, percent: i32) {
        let percent = percent.clamp(0, 100) as u8;
        self.state.volume_percent = percent;
        self.resource.set_volume(f32::from(percent) / 100.0);
    }

    pub fn change_volume(&mut self, delta: i32) {
        self.set_volume(i32::from(self.state.volume_percent) + delta);
    }

    /// Progress report from the resource. Reports for a replaced track are dropped.
    pub fn on_time_update(&mut self, session: Session, elapsed: Duration, total: Duration) {
        if session != self.session {
            trace!(?session, current = ?self.session, "stale time update");
            return;
        }
        self.state.progress_percent = progress_of(elapsed, total);
        self.state.elapsed_label = format_clock(elapsed);
    }

    pub fn handle_event(&mut self, event: AudioEvent) {
        if event.session() != self.session {
            trace!(?event, "dropping event for a replaced track");
            return;
        }
        match event {
            AudioEvent::TimeUpdate {
                session,
                elapsed,
                total,
            } => self.on_time_update(session, elapsed, total),
            AudioEvent::Ended { .. } => {
                debug!(track = %self.current_track().name, "track ended");
                self.on_track_ended();
            }
            AudioEvent::Failed { message, .. } => {
                warn!(track = %self.current_track().name, %message, "playback failed");
                self.state.is_playing = false;
            }
        }
    }

    /// Apply every notification received since the last call, in order.
    /// Returns whether anything was applied.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            applied = true;
        }
        applied
    }

    fn skip_to(&mut self, index: usize) {
        self.state.current_index = index;
        self.state.is_playing = true;
        self.state.progress_percent = 0.0;
        self.state.elapsed_label = format_clock(Duration::ZERO);

        if self.load_current() {
            self.start();
        } else {
            self.state.is_playing = false;
        }
    }

    /// Load the track at `current_index` under a fresh session.
    fn load_current(&mut self) -> bool {
        self.session = self.session.next();
        let track = self.playlist.get(self.state.current_index);
        match self.resource.load(self.session, &track.source) {
            Ok(()) => {
                debug!(track = %track.name, source = %track.source, "track loaded");
                true
            }
            Err(e) => {
                warn!(error = %e, source = %track.source, "failed to load track");
                false
            }
        }
    }

    /// Start output; a rejected start leaves the player paused.
    fn start(&mut self) {
        match self.resource.play() {
            Ok(()) => info!(track = %self.current_track().name, "playing"),
            Err(e) => {
                warn!(error = %e, track = %self.current_track().name, "playback failed to start");
                self.state.is_playing = false;
            }
        }
    }
}

impl<R: AudioResource> Drop for PlaybackController<R> {
    fn drop(&mut self) {
        // Output itself is stopped by the resource when it is dropped.
        self.resource.unsubscribe();
    }
}
