use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device")]
    NoOutputDevice,

    #[error("no track loaded")]
    NotLoaded,

    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[error("audio thread has shut down")]
    Disconnected,
}
