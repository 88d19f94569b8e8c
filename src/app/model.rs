//! Application model: the catalog, the active view and the list cursor.
//!
//! `App` decides which tracks are visible and in what order. The visible
//! list is also what the playback controller walks as its queue.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::{Difficulty, Track, TrackFilter, TrackId};
use crate::library::{CollectionError, CollectionId, StoreError, UserData};
use crate::player::Notice;

/// How many notices are kept for the status line.
const NOTICE_HISTORY: usize = 8;

/// Which slice of the catalog is listed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    All,
    Karaoke,
    Favorites,
    Library(CollectionId),
    Playlist(CollectionId),
}

/// What typed characters currently edit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prompt {
    Search,
    NewPlaylist,
    NewLibrary,
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Arc<Track>>,
    pub user: UserData,
    pub view: View,

    /// Search text plus the karaoke genre/difficulty chips.
    pub filter: TrackFilter,
    pub prompt: Option<Prompt>,
    pub name_input: String,

    /// Index into `tracks` of the highlighted row.
    pub selected: usize,
    /// Playlist that `a` adds to.
    pub target_playlist: Option<CollectionId>,
    pub queue_dirty: bool,
    pub catalog_name: String,
    pub metadata_window: bool,

    notices: VecDeque<Notice>,
}

impl App {
    pub fn new(tracks: Vec<Track>, user: UserData) -> Self {
        let target_playlist = user.playlists.items().last().map(|p| p.id);
        Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
            user,
            view: View::All,
            filter: TrackFilter::default(),
            prompt: None,
            name_input: String::new(),
            selected: 0,
            target_playlist,
            queue_dirty: true,
            catalog_name: String::new(),
            metadata_window: false,
            notices: VecDeque::new(),
        }
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }

    /// Mark the queue as needing to be handed to the player again.
    pub fn mark_queue_dirty(&mut self) {
        self.queue_dirty = true;
    }

    pub fn clear_queue_dirty(&mut self) {
        self.queue_dirty = false;
    }

    fn in_view(&self, track: &Track) -> bool {
        match self.view {
            View::All => true,
            View::Karaoke => track.is_karaoke_track,
            View::Favorites => self.user.favorites.contains(&track.id),
            View::Library(id) => self
                .user
                .libraries
                .get(id)
                .is_some_and(|c| c.tracks.contains(&track.id)),
            View::Playlist(id) => self
                .user
                .playlists
                .get(id)
                .is_some_and(|c| c.tracks.contains(&track.id)),
        }
    }

    /// Indices into `tracks` shown for the current view and filter, in
    /// catalog order.
    pub fn display_indices(&self) -> Vec<usize> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.in_view(t) && self.filter.matches(t))
            .map(|(i, _)| i)
            .collect()
    }

    /// The visible tracks, which form the playback queue.
    pub fn queue_tracks(&self) -> Vec<Arc<Track>> {
        self.display_indices()
            .into_iter()
            .map(|i| Arc::clone(&self.tracks[i]))
            .collect()
    }

    pub fn selected_track(&self) -> Option<&Arc<Track>> {
        if self.display_indices().contains(&self.selected) {
            self.tracks.get(self.selected)
        } else {
            None
        }
    }

    pub fn is_favorite(&self, id: &TrackId) -> bool {
        self.user.favorites.contains(id)
    }

    /// Human-readable name of the current view.
    pub fn view_label(&self) -> String {
        match self.view {
            View::All => "All songs".to_string(),
            View::Karaoke => "Karaoke".to_string(),
            View::Favorites => "Favorites".to_string(),
            View::Library(id) => self
                .user
                .libraries
                .get(id)
                .map(|c| format!("Library: {}", c.name))
                .unwrap_or_else(|| "Library".to_string()),
            View::Playlist(id) => self
                .user
                .playlists
                .get(id)
                .map(|c| format!("Playlist: {}", c.name))
                .unwrap_or_else(|| "Playlist".to_string()),
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        self.view = view;
        if view != View::Karaoke {
            self.filter.genre = None;
            self.filter.difficulty = None;
        }
        if let View::Playlist(id) = view {
            self.target_playlist = Some(id);
        }
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    /// Cycle All -> Karaoke -> Favorites -> each library -> each playlist -> All.
    pub fn cycle_view(&mut self) {
        let mut views = vec![View::All, View::Karaoke, View::Favorites];
        views.extend(self.user.libraries.items().iter().map(|c| View::Library(c.id)));
        views.extend(self.user.playlists.items().iter().map(|c| View::Playlist(c.id)));

        let pos = views.iter().position(|v| *v == self.view).unwrap_or(0);
        let next = views[(pos + 1) % views.len()];
        self.set_view(next);
    }

    pub fn toggle_karaoke_view(&mut self) {
        if self.view == View::Karaoke {
            self.set_view(View::All);
        } else {
            self.set_view(View::Karaoke);
        }
    }

    /// Genres present among karaoke tracks, sorted.
    pub fn karaoke_genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self
            .tracks
            .iter()
            .filter(|t| t.is_karaoke_track)
            .filter_map(|t| t.genre.as_deref().map(str::trim))
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        genres.sort_by_key(|g| g.to_lowercase());
        genres.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        genres
    }

    /// Step the genre chip: all -> each genre -> all. Only in the karaoke view.
    pub fn cycle_genre(&mut self) {
        if self.view != View::Karaoke {
            return;
        }
        let genres = self.karaoke_genres();
        self.filter.genre = match self.filter.genre.as_deref() {
            None => genres.first().cloned(),
            Some(cur) => genres
                .iter()
                .position(|g| g.eq_ignore_ascii_case(cur))
                .and_then(|i| genres.get(i + 1))
                .cloned(),
        };
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    /// Step the difficulty chip: all -> easy -> ... -> expert -> all.
    pub fn cycle_difficulty(&mut self) {
        if self.view != View::Karaoke {
            return;
        }
        self.filter.difficulty = match self.filter.difficulty {
            None => Difficulty::ALL.first().copied(),
            Some(d) => Difficulty::ALL
                .iter()
                .position(|x| *x == d)
                .and_then(|i| Difficulty::ALL.get(i + 1))
                .copied(),
        };
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    pub fn search_query(&self) -> &str {
        self.filter.query.as_deref().unwrap_or("")
    }

    /// Enter search mode: typed characters now edit the query.
    pub fn enter_search(&mut self) {
        self.prompt = Some(Prompt::Search);
        self.ensure_selected_visible();
    }

    pub fn exit_prompt(&mut self) {
        self.prompt = None;
        self.name_input.clear();
    }

    /// Clear the active search and restore selection visibility.
    pub fn clear_search(&mut self) {
        self.filter.query = None;
        self.prompt = None;
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.query.get_or_insert_with(String::new).push(c);
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    pub fn pop_search_char(&mut self) {
        if let Some(q) = self.filter.query.as_mut() {
            q.pop();
            if q.is_empty() {
                self.filter.query = None;
            }
        }
        self.mark_queue_dirty();
        self.ensure_selected_visible();
    }

    pub fn start_naming(&mut self, prompt: Prompt) {
        self.prompt = Some(prompt);
        self.name_input.clear();
    }

    /// Create the playlist or library named in `name_input`.
    pub fn submit_name(&mut self) -> Result<CollectionId, CollectionError> {
        let prompt = self.prompt;
        let name = std::mem::take(&mut self.name_input);
        let result = match prompt {
            Some(Prompt::NewLibrary) => self.user.libraries.create(&name),
            _ => self.user.playlists.create(&name).inspect(|id| {
                self.target_playlist = Some(*id);
            }),
        };
        match &result {
            Ok(_) => {
                self.prompt = None;
                self.push_notice(Notice::info(format!("Created \"{}\"", name.trim()), None));
            }
            Err(e) => {
                self.name_input = name;
                self.push_notice(Notice::error(e.to_string(), None));
            }
        }
        result
    }

    /// Flip the favorite mark on the highlighted track. Returns the new state,
    /// or `None` when nothing is highlighted.
    pub fn toggle_favorite_selected(&mut self) -> Result<Option<bool>, StoreError> {
        let Some(id) = self.selected_track().map(|t| t.id.clone()) else {
            return Ok(None);
        };
        let now = self.user.favorites.toggle(&id)?;
        let title = if now {
            "Added to Favorites"
        } else {
            "Removed from Favorites"
        };
        self.push_notice(Notice::info(title, None));
        if self.view == View::Favorites {
            self.mark_queue_dirty();
            self.ensure_selected_visible();
        }
        Ok(Some(now))
    }

    /// Add the highlighted track to the target playlist.
    pub fn add_selected_to_playlist(&mut self) -> Result<bool, CollectionError> {
        let Some(id) = self.selected_track().map(|t| t.id.clone()) else {
            return Ok(false);
        };
        let Some(pl) = self.target_playlist else {
            self.push_notice(Notice::warning(
                "No playlist yet",
                Some("Press N to create one".to_string()),
            ));
            return Ok(false);
        };
        let added = self.user.playlists.add_track(pl, &id)?;
        if added {
            self.push_notice(Notice::info("Added to playlist", None));
        }
        Ok(added)
    }

    /// Remove the highlighted track from the library or playlist being viewed.
    pub fn remove_selected_from_view(&mut self) -> Result<bool, CollectionError> {
        let Some(id) = self.selected_track().map(|t| t.id.clone()) else {
            return Ok(false);
        };
        let removed = match self.view {
            View::Library(c) => self.user.libraries.remove_track(c, &id)?,
            View::Playlist(c) => self.user.playlists.remove_track(c, &id)?,
            _ => false,
        };
        if removed {
            self.mark_queue_dirty();
            self.ensure_selected_visible();
        }
        Ok(removed)
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() == NOTICE_HISTORY {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Move the cursor to `id` if it is visible.
    pub fn follow(&mut self, id: &TrackId) {
        if let Some(i) = self.tracks.iter().position(|t| &t.id == id) {
            if self.display_indices().contains(&i) {
                self.selected = i;
            }
        }
    }

    /// Ensure that `selected` is part of the current view, otherwise move the
    /// selection to the first visible track.
    fn ensure_selected_visible(&mut self) {
        let display = self.display_indices();
        if display.is_empty() {
            self.selected = 0;
            return;
        }

        if !display.contains(&self.selected) {
            self.selected = display[0];
        }
    }

    /// Move selection to the next visible track, wrapping around.
    pub fn select_next(&mut self) {
        let display = self.display_indices();
        if display.is_empty() {
            return;
        }
        self.selected = match display.iter().position(|&i| i == self.selected) {
            Some(p) => display[(p + 1) % display.len()],
            None => display[0],
        };
    }

    /// Move selection to the previous visible track, wrapping around.
    pub fn select_prev(&mut self) {
        let display = self.display_indices();
        if display.is_empty() {
            return;
        }
        self.selected = match display.iter().position(|&i| i == self.selected) {
            Some(0) | None => display[display.len() - 1],
            Some(p) => display[p - 1],
        };
    }
}
