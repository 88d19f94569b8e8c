//! Small playback types shared by the controller, the engines and the UI.

use std::sync::Arc;

use crate::catalog::Track;

use super::error::{MediaFailure, PlayerError};

/// Identifies one `load` of the engine. Bumped on every track switch so events
/// produced for an older source can be told apart and dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// Something the engine observed about the source it is playing.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Duration became known (seconds).
    LoadedMetadata { duration: f64 },
    /// Enough data is buffered to start playback.
    CanPlay,
    /// Playback position advanced (seconds).
    TimeUpdate { position: f64 },
    /// The engine actually started producing audio.
    Play,
    /// The engine actually stopped producing audio.
    Pause,
    /// Settlement of an earlier play request.
    PlayResolved(Result<(), MediaFailure>),
    /// The source played through to its natural end.
    Ended,
    /// Loading or playback failed.
    Error(MediaFailure),
}

/// An engine event tagged with the load it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineMessage {
    pub generation: Generation,
    pub event: EngineEvent,
}

impl EngineMessage {
    pub fn new(generation: Generation, event: EngineEvent) -> Self {
        Self { generation, event }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RepeatMode {
    /// Wrap around to the start of the queue.
    All,
    /// Repeat the current track when it ends.
    One,
    /// Stop after the last track of the queue.
    Off,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::All
    }
}

impl RepeatMode {
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
            RepeatMode::Off => RepeatMode::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::All => "all",
            RepeatMode::One => "one",
            RepeatMode::Off => "off",
        }
    }
}

/// Controller state as seen from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Idle,
    Loaded,
    Playing,
    Paused,
    Ended,
    Error(PlayerError),
}

/// Read-only snapshot of the playback state handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub current: Option<Arc<Track>>,
    pub status: PlayerStatus,
    /// Mirrors the engine: true only after the engine confirmed it is playing.
    pub is_playing: bool,
    pub current_time: f64,
    /// `None` until metadata arrives.
    pub duration: Option<f64>,
    /// Volume the user chose, kept while muted.
    pub volume: f32,
    pub muted: bool,
    pub repeat: RepeatMode,
    pub shuffle: bool,
}

impl PlaybackState {
    pub fn new(volume: f32) -> Self {
        Self {
            current: None,
            status: PlayerStatus::Idle,
            is_playing: false,
            current_time: 0.0,
            duration: None,
            volume: volume.clamp(0.0, 1.0),
            muted: false,
            repeat: RepeatMode::default(),
            shuffle: false,
        }
    }

    /// Volume actually sent to the engine.
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Position as a fraction of the duration, 0 when the duration is unknown.
    pub fn progress(&self) -> f64 {
        match self.duration {
            Some(d) if d > 0.0 => (self.current_time / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient message for the UI (rendered as a toast line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description,
        }
    }

    pub fn warning(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            description,
        }
    }

    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description,
        }
    }

    pub fn from_error(err: &PlayerError) -> Self {
        match err {
            PlayerError::AutoplayBlocked => Self::warning(
                "Autoplay blocked",
                Some("Press play again to start the track".to_string()),
            ),
            PlayerError::NotReady => Self::warning(
                "Not ready yet",
                Some("The track is still loading, try again in a moment".to_string()),
            ),
            PlayerError::EmptyQueue => Self::warning(
                "Nothing to play",
                Some("The current list is empty".to_string()),
            ),
            PlayerError::NoTrackLoaded => Self::warning(
                "No track loaded",
                Some("Select a track first".to_string()),
            ),
            other => Self::error(
                format!("Playback error ({})", other.category()),
                Some(other.to_string()),
            ),
        }
    }
}

/// Render seconds as `m:ss`. Unknown or negative values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
