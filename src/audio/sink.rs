//! Utilities for turning a file on disk into a paused `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::error::AudioError;

pub(super) struct OpenedTrack {
    pub sink: Sink,
    pub total: Option<Duration>,
}

/// Decode `path` into a paused `Sink` at `volume`.
pub(super) fn open_track(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<OpenedTrack, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // Decoders for some formats (mp3 in particular) can't tell the length up front.
    let total = source.total_duration().or_else(|| probe_duration(path));

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.set_volume(volume);
    sink.append(source);
    Ok(OpenedTrack { sink, total })
}

/// Read the track length from the file's tags/properties.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let duration = tagged.properties().duration();
    (!duration.is_zero()).then_some(duration)
}

/// Relative locators are looked up under `media_dir`; absolute ones are kept.
pub(crate) fn resolve_source(media_dir: &Path, source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        media_dir.join(path)
    }
}

/// Ramp `sink` from `from` down to silence over `fade_out_ms`.
pub(super) fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
