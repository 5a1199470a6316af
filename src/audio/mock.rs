//! Test double that records every command it receives.

use std::sync::mpsc::Sender;
use std::time::Duration;

use super::error::AudioError;
use super::resource::AudioResource;
use super::types::{AudioEvent, Session};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Subscribe,
    Unsubscribe,
    Load { session: Session, source: String },
    Play,
    Pause,
    SetVolume(f32),
    Seek(Duration),
}

#[derive(Debug, Default)]
pub(crate) struct MockResource {
    pub calls: Vec<Call>,
    pub total: Option<Duration>,
    pub fail_play: bool,
    pub fail_load: bool,
    subscriber: Option<Sender<AudioEvent>>,
}

impl MockResource {
    pub fn with_total(secs: u64) -> Self {
        Self {
            total: Some(Duration::from_secs(secs)),
            ..Self::default()
        }
    }

    /// Deliver `event` to the subscriber, if any.
    pub fn emit(&self, event: AudioEvent) -> bool {
        self.subscriber
            .as_ref()
            .map(|tx| tx.send(event).is_ok())
            .unwrap_or(false)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscriber.is_some()
    }

    pub fn loaded_sources(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Load { source, .. } => Some(source.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn last(&self) -> Option<&Call> {
        self.calls.last()
    }
}

impl AudioResource for MockResource {
    fn subscribe(&mut self, events: Sender<AudioEvent>) {
        self.calls.push(Call::Subscribe);
        self.subscriber = Some(events);
    }

    fn unsubscribe(&mut self) {
        self.calls.push(Call::Unsubscribe);
        self.subscriber = None;
    }

    fn load(&mut self, session: Session, source: &str) -> Result<(), AudioError> {
        self.calls.push(Call::Load {
            session,
            source: source.to_string(),
        });
        if self.fail_load {
            return Err(AudioError::Open {
                path: source.into(),
                source: std::io::ErrorKind::NotFound.into(),
            });
        }
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.calls.push(Call::Play);
        if self.fail_play {
            return Err(AudioError::NoOutputDevice);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn set_volume(&mut self, level: f32) {
        self.calls.push(Call::SetVolume(level));
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.calls.push(Call::Seek(position));
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.total
    }
}

/// Lends a mock to a controller so the log stays readable after the
/// controller is dropped.
impl AudioResource for &mut MockResource {
    fn subscribe(&mut self, events: Sender<AudioEvent>) {
        (**self).subscribe(events)
    }

    fn unsubscribe(&mut self) {
        (**self).unsubscribe()
    }

    fn load(&mut self, session: Session, source: &str) -> Result<(), AudioError> {
        (**self).load(session, source)
    }

    fn play(&mut self) -> Result<(), AudioError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn set_volume(&mut self, level: f32) {
        (**self).set_volume(level)
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        (**self).seek(position)
    }

    fn duration(&self) -> Option<Duration> {
        (**self).duration()
    }
}
