use crate::catalog::TrackId;

use super::store::{Store, StoreError};

/// Favorite track ids, in the order they were added.
pub struct Favorites<S: Store<Vec<TrackId>>> {
    ids: Vec<TrackId>,
    store: S,
}

impl<S: Store<Vec<TrackId>>> Favorites<S> {
    /// Load the saved favorites. A missing blob starts an empty set.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let mut ids = store.load()?.unwrap_or_default();
        // Older blobs may carry repeats.
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
        Ok(Self { ids, store })
    }

    /// Start with no favorites, ignoring anything saved in `store`.
    pub fn empty(store: S) -> Self {
        Self {
            ids: Vec::new(),
            store,
        }
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip `id` and persist. Returns whether it is now a favorite. Nothing
    /// changes when the save fails.
    pub fn toggle(&mut self, id: &TrackId) -> Result<bool, StoreError> {
        let mut ids = self.ids.clone();
        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(i) => {
                ids.remove(i);
                false
            }
            None => {
                ids.push(id.clone());
                true
            }
        };
        self.store.save(&ids)?;
        self.ids = ids;
        Ok(now_favorite)
    }
}
