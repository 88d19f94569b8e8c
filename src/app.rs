//! View model for the terminal front end.
//!
//! `App` owns the catalog tracks and the user's favorites and collections.
//! It decides which tracks are visible, and that visible list doubles as
//! the play queue. The playback state itself lives in the controller.

mod model;

pub use model::{App, Prompt, View};
