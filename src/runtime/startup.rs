use std::path::{Path, PathBuf};

use crate::app::{App, View};
use crate::catalog::{self, Track, TrackFilter};
use crate::config;
use crate::library::UserData;
use crate::player::{MediaEngine, Notice, PlaybackController};

/// The command line argument, then `catalog.source`, then the working directory.
pub fn catalog_source(arg: Option<String>, settings: &config::Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .or_else(|| settings.catalog.source.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub struct CatalogLoad {
    pub tracks: Vec<Track>,
    pub name: String,
    pub notice: Option<Notice>,
}

/// Open and list the catalog. Failures leave an empty catalog and a notice.
pub fn load_catalog(source: &Path, settings: &config::Settings) -> CatalogLoad {
    let listed = catalog::open(source, &settings.catalog).and_then(|provider| {
        let name = provider.describe();
        provider
            .list_tracks(&TrackFilter::default())
            .map(|tracks| (tracks, name))
    });

    match listed {
        Ok((tracks, name)) => {
            log::info!("[Catalog] {} tracks from {name}", tracks.len());
            CatalogLoad {
                tracks,
                name,
                notice: None,
            }
        }
        Err(e) => {
            log::error!("[Catalog] {}: {e}", source.display());
            CatalogLoad {
                tracks: Vec::new(),
                name: source.display().to_string(),
                notice: Some(Notice::error("Error fetching songs", Some(e.to_string()))),
            }
        }
    }
}

/// Saved favorites and collections. Unreadable data is reported and replaced
/// by an empty in-memory set so the session still works.
pub fn load_user_data(data_dir: &Path) -> (UserData, Option<Notice>) {
    match UserData::open(data_dir) {
        Ok(data) => (data, None),
        Err(e) => {
            log::warn!("[Store] cannot load saved data from {}: {e}", data_dir.display());
            (
                UserData::in_memory(),
                Some(Notice::warning(
                    "Saved collections unavailable",
                    Some(e.to_string()),
                )),
            )
        }
    }
}

pub fn apply_playback_defaults<E: MediaEngine>(
    app: &mut App,
    player: &mut PlaybackController<E>,
    settings: &config::Settings,
) {
    if settings.ui.start_in_karaoke {
        app.set_view(View::Karaoke);
    }

    player.set_repeat(settings.playback.repeat.into());
    player.set_queue(app.queue_tracks());
    app.clear_queue_dirty();

    if settings.playback.shuffle {
        player.toggle_shuffle();
    }
}
