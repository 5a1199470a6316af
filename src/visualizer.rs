//! Decorative bar heights for the player panel.
//!
//! Everything here is synthetic: the values are random numbers and are never
//! derived from the audio signal or from anything the audio resource reports.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::config::VisualizerSettings;

/// Endless source of frames. Random heights in `[0, 100)` while playing,
/// all zeros while paused.
pub struct VisualizerFeed<R = ThreadRng> {
    rng: R,
    bars: usize,
    playing: bool,
}

impl<R: Rng> VisualizerFeed<R> {
    pub fn with_rng(bars: usize, rng: R) -> Self {
        Self {
            rng,
            bars,
            playing: false,
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl<R: Rng> Iterator for VisualizerFeed<R> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        let frame = if self.playing {
            (0..self.bars)
                .map(|_| self.rng.gen_range(0.0..100.0))
                .collect()
        } else {
            vec![0.0; self.bars]
        };
        Some(frame)
    }
}

/// Fixed-interval timer driven by the event loop's clock.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the timer; the first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Whether a tick is due at `now`. Consumes the tick.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(at) if now >= at => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` while stopped.
    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|at| at.saturating_duration_since(now))
    }
}

/// The feed paced by a `Cadence`, holding the frame currently on screen.
pub struct Visualizer<R = ThreadRng> {
    feed: VisualizerFeed<R>,
    cadence: Cadence,
    frame: Vec<f64>,
}

impl Visualizer<ThreadRng> {
    pub fn new(settings: &VisualizerSettings) -> Self {
        Self::with_rng(settings, rand::thread_rng())
    }
}

impl<R: Rng> Visualizer<R> {
    pub fn with_rng(settings: &VisualizerSettings, rng: R) -> Self {
        let bars = settings.bars.max(1);
        Self {
            feed: VisualizerFeed::with_rng(bars, rng),
            cadence: Cadence::new(Duration::from_millis(settings.interval_ms.max(1))),
            frame: vec![0.0; bars],
        }
    }

    /// Follow the play state and advance the frame when a tick is due.
    /// Returns whether the frame changed.
    pub fn tick(&mut self, playing: bool, now: Instant) -> bool {
        if playing != self.feed.is_playing() {
            self.feed.set_playing(playing);
            if playing {
                self.cadence.start(now);
            } else {
                self.stop();
                return true;
            }
        }

        if self.cadence.due(now) {
            if let Some(frame) = self.feed.next() {
                self.frame = frame;
            }
            return true;
        }
        false
    }

    /// Clear the timer and flatten the bars.
    pub fn stop(&mut self) {
        self.cadence.stop();
        self.feed.set_playing(false);
        if let Some(frame) = self.feed.next() {
            self.frame = frame;
        }
    }

    pub fn frame(&self) -> &[f64] {
        &self.frame
    }

    pub fn is_running(&self) -> bool {
        self.cadence.is_running()
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.cadence.until_due(now)
    }
}
