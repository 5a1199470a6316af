//! Application module: the model the TUI renders and the intents it accepts.
//!
//! `App` owns the playback controller and the visualizer. Key presses and
//! mouse clicks are turned into `Intent`s first, so the runtime never touches
//! playback state directly.

mod intent;
mod model;

pub use intent::*;
pub use model::*;
