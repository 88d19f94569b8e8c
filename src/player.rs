//! Playback: the controller state machine, the queue it walks and the media
//! engines it drives.

mod controller;
mod engine;
mod error;
mod queue;
mod rodio_engine;
mod sink;
mod thread;
mod types;

pub use controller::PlaybackController;
pub use engine::MediaEngine;
pub use error::{EngineError, MediaFailure, PlayerError};
pub use queue::Queue;
pub use rodio_engine::RodioEngine;
pub use types::*;

#[cfg(test)]
mod tests;
