use thiserror::Error;

/// A single playlist entry. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
    /// Human-readable length shown next to the progress bar, e.g. `4:22`.
    pub duration_label: String,
    /// File name or path handed to the audio resource on load.
    pub source: String,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        duration_label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            duration_label: duration_label.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("a playlist needs at least one track")]
    Empty,
}

/// Ordered, non-empty sequence of tracks.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub(super) tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Track at `index`, wrapped into range.
    pub fn get(&self, index: usize) -> &Track {
        &self.tracks[index % self.tracks.len()]
    }

    /// Index after `index`, wrapping past the last track back to the first.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping before the first track to the last.
    pub fn prev_index(&self, index: usize) -> usize {
        let n = self.len();
        (index % n + n - 1) % n
    }
}
