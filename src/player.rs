//! Track playback controller.
//!
//! `PlaybackController` owns the `PlaybackState`, turns user intents into
//! commands for an `AudioResource` and folds the resource's notifications
//! back into the state. The UI only ever reads the state.

mod controller;
mod state;

pub use controller::PlaybackController;
pub use state::*;

#[cfg(test)]
mod tests;
