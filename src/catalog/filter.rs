//! Track filtering used by catalog queries and by the app's search box.

use super::model::{Difficulty, Track};

/// Criteria applied to catalog listings. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackFilter {
    /// Free-text query matched against title, artist and album.
    pub query: Option<String>,
    pub karaoke_only: bool,
    /// Exact genre, compared case-insensitively. `"all"` is treated as no filter.
    pub genre: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl TrackFilter {
    pub fn karaoke() -> Self {
        Self {
            karaoke_only: true,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn matches(&self, track: &Track) -> bool {
        if self.karaoke_only && !track.is_karaoke_track {
            return false;
        }

        if let Some(genre) = self.genre.as_deref().map(str::trim) {
            if !genre.is_empty() && !genre.eq_ignore_ascii_case("all") {
                let hit = track
                    .genre
                    .as_deref()
                    .map(|g| g.trim().eq_ignore_ascii_case(genre))
                    .unwrap_or(false);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(d) = self.difficulty {
            if track.difficulty != Some(d) {
                return false;
            }
        }

        match self.query.as_deref() {
            Some(q) => matches_query(track, q),
            None => true,
        }
    }

    pub fn apply<'a, I>(&self, tracks: I) -> Vec<Track>
    where
        I: IntoIterator<Item = &'a Track>,
    {
        tracks
            .into_iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring search over title, artist and album.
///
/// A blank query matches every track. A track without an album simply can't
/// match on album.
pub fn matches_query(track: &Track, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    track.title.to_lowercase().contains(&needle)
        || track.artist.to_lowercase().contains(&needle)
        || track
            .album
            .as_deref()
            .map(|a| a.to_lowercase().contains(&needle))
            .unwrap_or(false)
}
