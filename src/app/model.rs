use std::time::Instant;

use crate::audio::AudioResource;
use crate::config::UiSettings;
use crate::player::{PlaybackController, PlaybackState};
use crate::playlist::Track;
use crate::visualizer::Visualizer;

use super::intent::Intent;

/// The main application model.
pub struct App<R: AudioResource> {
    controller: PlaybackController<R>,
    visualizer: Visualizer,
    volume_step: i32,

    /// Whether the full player panel is shown (otherwise a one-line indicator).
    pub panel_open: bool,
    pub should_quit: bool,
}

impl<R: AudioResource> App<R> {
    pub fn new(
        controller: PlaybackController<R>,
        visualizer: Visualizer,
        volume_step: u8,
        ui: &UiSettings,
    ) -> Self {
        Self {
            controller,
            visualizer,
            volume_step: i32::from(volume_step.max(1)),
            panel_open: ui.start_open,
            should_quit: false,
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        self.controller.state()
    }

    pub fn current_track(&self) -> &Track {
        self.controller.current_track()
    }

    pub fn track_count(&self) -> usize {
        self.controller.playlist().len()
    }

    pub fn bars(&self) -> &[f64] {
        self.visualizer.frame()
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::TogglePlay => self.controller.toggle_play(),
            Intent::Next => self.controller.next_track(),
            Intent::Previous => self.controller.previous_track(),
            Intent::VolumeUp => self.controller.change_volume(self.volume_step),
            Intent::VolumeDown => self.controller.change_volume(-self.volume_step),
            Intent::Seek(percent) => self.controller.seek_to(percent),
            Intent::TogglePanel => self.panel_open = !self.panel_open,
            Intent::Quit => self.should_quit = true,
        }
    }

    /// Fold in audio notifications and advance the visualizer.
    /// Returns whether anything visible changed.
    pub fn sync(&mut self, now: Instant) -> bool {
        let audio_changed = self.controller.pump();
        let playing = self.controller.state().is_playing;
        let bars_changed = self.visualizer.tick(playing, now);
        audio_changed || bars_changed
    }

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    /// Stop recurring work before the controller goes away.
    pub fn shutdown(&mut self) {
        self.visualizer.stop();
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &PlaybackController<R> {
        &self.controller
    }
}
