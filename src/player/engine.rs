//! The seam between the controller and whatever actually produces sound.

use std::sync::mpsc::Sender;

use super::types::{EngineMessage, Generation};

/// One single-stream media engine.
///
/// Every call is non-blocking. `pause`, `set_position` and `set_volume`
/// take effect immediately; `load` and `request_play` settle later and report
/// back through the subscribed channel, tagged with the generation they were
/// issued for.
pub trait MediaEngine {
    /// Route all future events to `events`, replacing any earlier subscriber.
    fn subscribe(&mut self, events: Sender<EngineMessage>);

    /// Replace the current source, discarding any in-flight playback.
    fn load(&mut self, generation: Generation, source: &str);

    /// Ask the engine to start playing the source loaded for `generation`.
    /// The outcome arrives as `EngineEvent::PlayResolved` (and `Play` on success).
    fn request_play(&mut self, generation: Generation);

    fn pause(&mut self);

    fn set_position(&mut self, seconds: f64);

    fn set_volume(&mut self, volume: f32);

    /// Drop the current source and stop emitting events for it.
    fn unload(&mut self);
}
