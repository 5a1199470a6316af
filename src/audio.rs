//! Audio output: the `AudioResource` seam and its `rodio` implementation.
//!
//! The player controller only ever talks to `AudioResource`. `RodioResource`
//! runs decoding and output on a dedicated thread and reports progress back
//! as `AudioEvent`s over a channel.

mod error;
mod player;
mod resource;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use error::AudioError;
pub use player::RodioResource;
pub use resource::AudioResource;
pub use types::{AudioEvent, Session};
