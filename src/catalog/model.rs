use std::fmt;

use serde::{Deserialize, Serialize};

/// Cover shown when a track has no artwork of its own.
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop";

/// Artist recorded for tracks that arrive without one.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Stable identity of a track. Two tracks are the same track iff their ids match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Karaoke difficulty rating.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// A playable audio item as handed out by a catalog provider.
///
/// Records are validated when they enter the catalog, so every `Track` has a
/// non-empty id, title and source.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    /// Where the encoded audio lives: a filesystem path, `file://` URL or remote URL.
    pub source_url: String,
    /// Display-only duration supplied by the catalog, e.g. `"3:21"`.
    pub duration_hint: Option<String>,
    pub is_karaoke_track: bool,
    pub is_competition_eligible: bool,
    pub cover_image_url: Option<String>,
    pub genre: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl Track {
    /// True when `other` is the same catalog entry. Never compares sources.
    pub fn same_track(&self, other: &Track) -> bool {
        self.id == other.id
    }

    pub fn cover_image(&self) -> &str {
        self.cover_image_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_COVER_URL)
    }

    /// `"Artist - Title"`, used by list rendering and notices.
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
