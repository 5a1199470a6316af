use std::sync::mpsc::Sender;
use std::time::Duration;

use super::error::AudioError;
use super::types::{AudioEvent, Session};

/// The device that decodes and outputs one track at a time.
///
/// Commands return immediately. Their effects are observed later through the
/// `AudioEvent`s sent to the subscribed channel.
pub trait AudioResource {
    /// Route `TimeUpdate`, `Ended` and `Failed` events to `events`.
    fn subscribe(&mut self, events: Sender<AudioEvent>);

    /// Stop delivering events.
    fn unsubscribe(&mut self);

    /// Replace the current track with `source`. Loading a new track
    /// unloads the previous one. The new track starts paused.
    fn load(&mut self, session: Session, source: &str) -> Result<(), AudioError>;

    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    /// Output level in `0.0..=1.0`.
    fn set_volume(&mut self, level: f32);

    fn seek(&mut self, position: Duration) -> Result<(), AudioError>;

    /// Total length of the loaded track, once known.
    fn duration(&self) -> Option<Duration>;
}
