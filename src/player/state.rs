use std::time::Duration;

/// Coarse transport state. The track index is orthogonal to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Paused,
    Playing,
}

/// Everything the UI needs to render the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Always a valid index into the playlist.
    pub current_index: usize,
    pub is_playing: bool,
    /// `0..=100`.
    pub volume_percent: u8,
    /// `0.0..=100.0`, zero while the track length is unknown.
    pub progress_percent: f64,
    /// Elapsed time as `M:SS`.
    pub elapsed_label: String,
}

impl PlaybackState {
    pub fn new(volume_percent: u8) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            volume_percent: volume_percent.min(100),
            progress_percent: 0.0,
            elapsed_label: format_clock(Duration::ZERO),
        }
    }

    pub fn transport(&self) -> Transport {
        if self.is_playing {
            Transport::Playing
        } else {
            Transport::Paused
        }
    }
}

/// Format `d` as `M:SS` (minutes are not padded).
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Share of `total` covered by `elapsed`, in percent. Zero when `total` is zero.
pub fn progress_of(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64() * 100.0).clamp(0.0, 100.0)
}
