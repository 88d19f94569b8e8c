use std::path::{Path, PathBuf};

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::CatalogSettings;

use super::filter::TrackFilter;
use super::model::{Track, TrackId, UNKNOWN_ARTIST};
use super::{CatalogError, CatalogProvider};

fn is_audio_file(path: &Path, settings: &CatalogSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Directories named "karaoke" (any case) mark everything under them as karaoke tracks.
fn under_karaoke_dir(rel: &Path) -> bool {
    rel.parent()
        .map(|p| {
            p.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.eq_ignore_ascii_case("karaoke"))
                    .unwrap_or(false)
            })
        })
        .unwrap_or(false)
}

fn read_track(root: &Path, path: &Path) -> Track {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let id = rel.to_string_lossy().replace('\\', "/");

    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist: Option<String> = None;
    let mut album: Option<String> = None;
    let mut genre: Option<String> = None;
    let mut duration_hint: Option<String> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        let secs = tagged.properties().duration().as_secs_f64();
        duration_hint = Some(crate::player::format_time(secs));

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.title() {
                if !v.trim().is_empty() {
                    title = v.trim().to_string();
                }
            }
            artist = tag
                .artist()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            album = tag
                .album()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            genre = tag
                .genre()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }
    }

    Track {
        id: TrackId::new(id),
        title,
        artist: artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        album,
        source_url: path.display().to_string(),
        duration_hint,
        is_karaoke_track: under_karaoke_dir(rel),
        is_competition_eligible: false,
        cover_image_url: None,
        genre,
        difficulty: None,
    }
}

pub fn scan(dir: &Path, settings: &CatalogSettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(read_track(dir, path));
        }
    }

    tracks.sort_by(|a, b| a.display().to_lowercase().cmp(&b.display().to_lowercase()));
    tracks
}

/// Catalog built by scanning a music directory once at startup.
pub struct DirCatalog {
    root: PathBuf,
    tracks: Vec<Track>,
}

impl DirCatalog {
    pub fn open(root: &Path, settings: &CatalogSettings) -> Result<Self, CatalogError> {
        if !root.is_dir() {
            return Err(CatalogError::NotADirectory(root.to_path_buf()));
        }
        let tracks = scan(root, settings);
        log::info!(
            "[Catalog] scanned {} tracks under {}",
            tracks.len(),
            root.display()
        );
        Ok(Self {
            root: root.to_path_buf(),
            tracks,
        })
    }
}

impl CatalogProvider for DirCatalog {
    fn list_tracks(&self, filter: &TrackFilter) -> Result<Vec<Track>, CatalogError> {
        Ok(filter.apply(&self.tracks))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
