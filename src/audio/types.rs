//! Audio-related small types and handles.
//!
//! This module defines the load session id, the events the audio side
//! reports, the commands understood by the audio thread and the shared
//! track info handle.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Identifies one `load` of a track. Every notification carries the session
/// it belongs to so late reports about a replaced track can be told apart.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Session(u64);

impl Session {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Notifications emitted by an audio resource.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    /// Periodic progress while playing. `total` is zero when unknown.
    TimeUpdate {
        session: Session,
        elapsed: Duration,
        total: Duration,
    },
    /// The track ran out on its own. Sent once per session.
    Ended { session: Session },
    /// Loading or starting the track failed.
    Failed { session: Session, message: String },
}

impl AudioEvent {
    pub fn session(&self) -> Session {
        match self {
            Self::TimeUpdate { session, .. }
            | Self::Ended { session }
            | Self::Failed { session, .. } => *session,
        }
    }
}

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Route future events to this sender.
    Subscribe(Sender<AudioEvent>),
    /// Stop emitting events.
    Unsubscribe,
    /// Replace the current track with the file at `path`, paused.
    Load { session: Session, path: PathBuf },
    Play,
    Pause,
    /// Output level in `0.0..=1.0`.
    SetVolume(f32),
    /// Jump to an absolute position in the current track.
    Seek(Duration),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// What the caller side knows about the loaded track.
#[derive(Debug, Clone, Default)]
pub(super) struct TrackInfo {
    pub session: Session,
    pub total: Option<Duration>,
}

pub(super) type TrackInfoHandle = Arc<Mutex<TrackInfo>>;
