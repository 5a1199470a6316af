use crate::app::App;
use crate::audio::RodioResource;
use crate::config;
use crate::player::PlaybackController;
use crate::playlist;
use crate::visualizer::Visualizer;

/// Wire the audio backend, controller and visualizer from `settings`.
pub fn build_app(settings: &config::Settings) -> App<RodioResource> {
    let resource = RodioResource::new(&settings.audio);
    let controller = PlaybackController::new(
        playlist::builtin(),
        resource,
        settings.audio.initial_volume,
    );
    let visualizer = Visualizer::new(&settings.visualizer);

    App::new(
        controller,
        visualizer,
        settings.audio.volume_step,
        &settings.ui,
    )
}
