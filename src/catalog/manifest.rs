//! Catalog backed by a manifest file (TOML or JSON) listing track records.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::filter::TrackFilter;
use super::model::{Difficulty, Track, TrackId, UNKNOWN_ARTIST};
use super::{CatalogError, CatalogProvider};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    tracks: Vec<RawTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// A track record as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawTrack {
    id: Option<RawId>,
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    #[serde(alias = "url", alias = "source")]
    source_url: Option<String>,
    #[serde(alias = "duration")]
    duration_hint: Option<String>,
    #[serde(default)]
    is_karaoke_track: bool,
    #[serde(default, alias = "is_competition_master")]
    is_competition_eligible: bool,
    cover_image_url: Option<String>,
    genre: Option<String>,
    difficulty: Option<Difficulty>,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl RawTrack {
    fn validate(self, index: usize, base: Option<&Path>) -> Result<Track, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            index,
            reason: reason.to_string(),
        };

        let id = match self.id {
            Some(RawId::Number(n)) => n.to_string(),
            Some(RawId::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(invalid("missing id")),
        };
        let title = non_blank(self.title).ok_or_else(|| invalid("missing title"))?;
        let source = non_blank(self.source_url).ok_or_else(|| invalid("missing source_url"))?;

        Ok(Track {
            id: TrackId::new(id),
            title,
            artist: non_blank(self.artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: non_blank(self.album),
            source_url: resolve_source(&source, base),
            duration_hint: non_blank(self.duration_hint),
            is_karaoke_track: self.is_karaoke_track,
            is_competition_eligible: self.is_competition_eligible,
            cover_image_url: non_blank(self.cover_image_url),
            genre: non_blank(self.genre),
            difficulty: self.difficulty,
        })
    }
}

/// Relative filesystem sources are taken relative to the manifest's directory.
fn resolve_source(source: &str, base: Option<&Path>) -> String {
    if source.contains("://") {
        return source.to_string();
    }
    let p = Path::new(source);
    match base {
        Some(dir) if p.is_relative() => dir.join(p).display().to_string(),
        _ => source.to_string(),
    }
}

/// Parse manifest text. `json` selects the JSON reader, otherwise TOML.
pub fn parse_manifest(
    text: &str,
    json: bool,
    base: Option<&Path>,
) -> Result<Vec<Track>, CatalogError> {
    let manifest: Manifest = if json {
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?
    } else {
        toml::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?
    };

    let mut seen: HashSet<TrackId> = HashSet::new();
    let mut tracks = Vec::with_capacity(manifest.tracks.len());
    for (index, raw) in manifest.tracks.into_iter().enumerate() {
        let track = raw.validate(index, base)?;
        if !seen.insert(track.id.clone()) {
            return Err(CatalogError::DuplicateId(track.id));
        }
        tracks.push(track);
    }
    Ok(tracks)
}

/// Tracks loaded once from a manifest file and served in file order.
pub struct ManifestCatalog {
    path: PathBuf,
    tracks: Vec<Track>,
}

impl ManifestCatalog {
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let tracks = parse_manifest(&text, json, path.parent())?;
        log::info!(
            "[Catalog] loaded {} tracks from {}",
            tracks.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            tracks,
        })
    }

    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            path: PathBuf::new(),
            tracks,
        }
    }
}

impl CatalogProvider for ManifestCatalog {
    fn list_tracks(&self, filter: &TrackFilter) -> Result<Vec<Track>, CatalogError> {
        Ok(filter.apply(&self.tracks))
    }

    fn describe(&self) -> String {
        format!("manifest {}", self.path.display())
    }
}
