use std::path::Path;

use crate::catalog::TrackId;

use super::collections::{Collection, Collections};
use super::favorites::Favorites;
use super::store::{JsonFileStore, MemoryStore, Store, StoreError};
use super::{FAVORITES_KEY, LIBRARIES_KEY, PLAYLISTS_KEY};

pub type FavoriteStore = Box<dyn Store<Vec<TrackId>>>;
pub type CollectionStore = Box<dyn Store<Vec<Collection>>>;

/// Everything the user keeps across sessions.
pub struct UserData {
    pub favorites: Favorites<FavoriteStore>,
    pub libraries: Collections<CollectionStore>,
    pub playlists: Collections<CollectionStore>,
}

impl UserData {
    /// Load from JSON files under `dir`.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        Self::from_stores(
            Box::new(JsonFileStore::new(dir, FAVORITES_KEY)),
            Box::new(JsonFileStore::new(dir, LIBRARIES_KEY)),
            Box::new(JsonFileStore::new(dir, PLAYLISTS_KEY)),
        )
    }

    /// Empty, unsaved user data.
    pub fn in_memory() -> Self {
        Self {
            favorites: Favorites::empty(Box::new(MemoryStore::<Vec<TrackId>>::new(
                FAVORITES_KEY,
            ))),
            libraries: Collections::empty(
                "Library",
                Box::new(MemoryStore::<Vec<Collection>>::new(LIBRARIES_KEY)),
            ),
            playlists: Collections::empty(
                "Playlist",
                Box::new(MemoryStore::<Vec<Collection>>::new(PLAYLISTS_KEY)),
            ),
        }
    }

    pub fn from_stores(
        favorites: FavoriteStore,
        libraries: CollectionStore,
        playlists: CollectionStore,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            favorites: Favorites::load(favorites)?,
            libraries: Collections::load("Library", libraries)?,
            playlists: Collections::load("Playlist", playlists)?,
        })
    }
}
