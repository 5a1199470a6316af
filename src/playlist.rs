//! Playlist model: immutable tracks in a fixed, non-empty order.
//!
//! Index arithmetic for skipping wraps around in both directions, so any
//! index handed out by a `Playlist` is always valid for it.

mod builtin;
mod model;

pub use builtin::builtin;
pub use model::*;
