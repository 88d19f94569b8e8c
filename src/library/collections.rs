use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::catalog::TrackId;

use super::store::{Store, StoreError};

/// Creation timestamp in milliseconds since the epoch.
pub type CollectionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<TrackId>,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),
    #[error("no {kind} with id {id}")]
    UnknownId { kind: &'static str, id: CollectionId },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A named list of user collections: either libraries or playlists.
pub struct Collections<S: Store<Vec<Collection>>> {
    kind: &'static str,
    items: Vec<Collection>,
    store: S,
    clock: fn() -> u64,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl<S: Store<Vec<Collection>>> Collections<S> {
    /// `kind` names the collection in messages, e.g. `"Library"`.
    pub fn load(kind: &'static str, store: S) -> Result<Self, StoreError> {
        let items = store.load()?.unwrap_or_default();
        Ok(Self {
            kind,
            items,
            store,
            clock: now_ms,
        })
    }

    pub fn empty(kind: &'static str, store: S) -> Self {
        Self {
            kind,
            items: Vec::new(),
            store,
            clock: now_ms,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn items(&self) -> &[Collection] {
        &self.items
    }

    pub fn get(&self, id: CollectionId) -> Option<&Collection> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn create(&mut self, name: &str) -> Result<CollectionId, CollectionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName(self.kind));
        }

        let mut id = (self.clock)();
        // Two creations inside the same millisecond still get distinct ids.
        while self.items.iter().any(|c| c.id == id) {
            id += 1;
        }

        let mut items = self.items.clone();
        items.push(Collection {
            id,
            name: name.to_string(),
            tracks: Vec::new(),
        });
        self.commit(items)?;
        log::info!("[Library] created {} {name:?} ({id})", self.kind);
        Ok(id)
    }

    /// Add `track` unless it is already in the collection. Returns whether it
    /// was added.
    pub fn add_track(&mut self, id: CollectionId, track: &TrackId) -> Result<bool, CollectionError> {
        let idx = self.index_of(id)?;
        if self.items[idx].tracks.contains(track) {
            return Ok(false);
        }
        let mut items = self.items.clone();
        items[idx].tracks.push(track.clone());
        self.commit(items)?;
        Ok(true)
    }

    /// Returns whether the track was present.
    pub fn remove_track(
        &mut self,
        id: CollectionId,
        track: &TrackId,
    ) -> Result<bool, CollectionError> {
        let idx = self.index_of(id)?;
        if !self.items[idx].tracks.contains(track) {
            return Ok(false);
        }
        let mut items = self.items.clone();
        items[idx].tracks.retain(|t| t != track);
        self.commit(items)?;
        Ok(true)
    }

    /// Persist `items`, then adopt them. A failed save leaves the list as it was.
    fn commit(&mut self, items: Vec<Collection>) -> Result<(), StoreError> {
        self.store.save(&items)?;
        self.items = items;
        Ok(())
    }

    fn index_of(&self, id: CollectionId) -> Result<usize, CollectionError> {
        self.items
            .iter()
            .position(|c| c.id == id)
            .ok_or(CollectionError::UnknownId {
                kind: self.kind,
                id,
            })
    }
}
