use thiserror::Error;

use crate::catalog::TrackId;

/// Everything that can go wrong while driving playback.
///
/// None of these are fatal: the controller records them and stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("not ready yet, still buffering")]
    NotReady,
    #[error("autoplay blocked, press play again")]
    AutoplayBlocked,
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("track {0} is not in the queue")]
    NotFound(TrackId),
    #[error("the queue is empty")]
    EmptyQueue,
    #[error("no track loaded")]
    NoTrackLoaded,
}

impl PlayerError {
    /// Short machine-friendly category shown in notices.
    pub fn category(&self) -> &'static str {
        match self {
            PlayerError::NotReady => "not-ready",
            PlayerError::AutoplayBlocked => "blocked",
            PlayerError::Network(_) => "network",
            PlayerError::Decode(_) => "decode",
            PlayerError::NotFound(_) => "not-found",
            PlayerError::EmptyQueue => "empty-queue",
            PlayerError::NoTrackLoaded => "no-track",
        }
    }
}

/// Failures reported by a media engine while loading or playing a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaFailure {
    /// The platform refused to start playback without a user gesture.
    Blocked,
    /// The source could not be fetched or opened.
    Network(String),
    /// The source was fetched but could not be decoded or is unsupported.
    Decode(String),
}

impl From<MediaFailure> for PlayerError {
    fn from(f: MediaFailure) -> Self {
        match f {
            MediaFailure::Blocked => PlayerError::AutoplayBlocked,
            MediaFailure::Network(m) => PlayerError::Network(m),
            MediaFailure::Decode(m) => PlayerError::Decode(m),
        }
    }
}

/// Failure to bring up an engine at all (e.g. no audio device).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("failed to start audio thread: {0}")]
    Thread(#[from] std::io::Error),
}
