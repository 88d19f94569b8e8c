//! Queue navigation: next/previous with wrap-around over an ordered track list.
//!
//! The queue keeps a play `order` of positions into `tracks`. Without shuffle
//! the order is the identity, so navigation follows catalog order.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Track, TrackId};

use super::error::PlayerError;

/// Position after `current_id` in `ids`, wrapping to the front.
pub fn next_index<'a, I>(ids: I, current_id: &TrackId) -> Result<usize, PlayerError>
where
    I: ExactSizeIterator<Item = &'a TrackId>,
{
    let len = ids.len();
    if len == 0 {
        return Err(PlayerError::EmptyQueue);
    }
    let index = position(ids, current_id)?;
    Ok((index + 1) % len)
}

/// Position before `current_id` in `ids`, wrapping to the back.
pub fn previous_index<'a, I>(ids: I, current_id: &TrackId) -> Result<usize, PlayerError>
where
    I: ExactSizeIterator<Item = &'a TrackId>,
{
    let len = ids.len();
    if len == 0 {
        return Err(PlayerError::EmptyQueue);
    }
    let index = position(ids, current_id)?;
    Ok((index + len - 1) % len)
}

fn position<'a, I>(mut ids: I, current_id: &TrackId) -> Result<usize, PlayerError>
where
    I: Iterator<Item = &'a TrackId>,
{
    ids.position(|id| id == current_id)
        .ok_or_else(|| PlayerError::NotFound(current_id.clone()))
}

#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Arc<Track>>,
    order: Vec<usize>,
}

impl Queue {
    pub fn new(tracks: Vec<Arc<Track>>) -> Self {
        let order = (0..tracks.len()).collect();
        Self { tracks, order }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: &TrackId) -> Option<&Arc<Track>> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.get(id).is_some()
    }

    fn ids_in_order(&self) -> impl ExactSizeIterator<Item = &TrackId> {
        self.order.iter().map(|&i| &self.tracks[i].id)
    }

    pub fn next_after(&self, current_id: &TrackId) -> Result<Arc<Track>, PlayerError> {
        let pos = next_index(self.ids_in_order(), current_id)?;
        Ok(self.tracks[self.order[pos]].clone())
    }

    pub fn previous_before(&self, current_id: &TrackId) -> Result<Arc<Track>, PlayerError> {
        let pos = previous_index(self.ids_in_order(), current_id)?;
        Ok(self.tracks[self.order[pos]].clone())
    }

    /// True when `current_id` sits at the final play-order position.
    pub fn is_last(&self, current_id: &TrackId) -> bool {
        self.ids_in_order().last() == Some(current_id)
    }

    /// Turn shuffle on or off. A new shuffle puts `current` first so the rest
    /// of the queue plays before it comes round again.
    pub fn set_shuffle<R: Rng + ?Sized>(
        &mut self,
        shuffle: bool,
        current: Option<&TrackId>,
        rng: &mut R,
    ) {
        self.order = (0..self.tracks.len()).collect();
        if !shuffle {
            return;
        }

        self.order.shuffle(rng);
        if let Some(id) = current {
            if let Some(track_pos) = self.tracks.iter().position(|t| &t.id == id) {
                if let Some(p) = self.order.iter().position(|&i| i == track_pos) {
                    self.order.swap(0, p);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn t(id: &str) -> Track {
        Track {
            id: TrackId::new(id),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            album: None,
            source_url: format!("/music/{id}.mp3"),
            duration_hint: None,
            is_karaoke_track: false,
            is_competition_eligible: false,
            cover_image_url: None,
            genre: None,
            difficulty: None,
        }
    }

    fn queue(ids: &[&str]) -> Queue {
        Queue::new(ids.iter().map(|id| Arc::new(t(id))).collect())
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let q = queue(&["1", "2", "3"]);
        assert_eq!(q.next_after(&"3".into()).unwrap().id.as_str(), "1");
        assert_eq!(q.previous_before(&"1".into()).unwrap().id.as_str(), "3");
        assert_eq!(q.next_after(&"1".into()).unwrap().id.as_str(), "2");
    }

    #[test]
    fn n_steps_return_to_start() {
        let q = queue(&["a", "b", "c", "d", "e"]);
        for start in ["a", "c", "e"] {
            let mut cur = TrackId::new(start);
            for _ in 0..q.len() {
                cur = q.next_after(&cur).unwrap().id.clone();
            }
            assert_eq!(cur.as_str(), start);
        }
    }

    #[test]
    fn previous_then_next_is_identity() {
        let q = queue(&["a", "b", "c"]);
        for id in ["a", "b", "c"] {
            let prev = q.previous_before(&id.into()).unwrap();
            assert_eq!(q.next_after(&prev.id).unwrap().id.as_str(), id);
        }
    }

    #[test]
    fn single_track_queue_wraps_to_itself() {
        let q = queue(&["only"]);
        assert_eq!(q.next_after(&"only".into()).unwrap().id.as_str(), "only");
        assert_eq!(q.previous_before(&"only".into()).unwrap().id.as_str(), "only");
    }

    #[test]
    fn missing_id_is_not_found_and_empty_is_empty_queue() {
        let q = queue(&["1"]);
        assert_eq!(
            q.next_after(&"9".into()).unwrap_err(),
            PlayerError::NotFound("9".into())
        );
        let empty = Queue::default();
        assert_eq!(
            empty.next_after(&"1".into()).unwrap_err(),
            PlayerError::EmptyQueue
        );
        assert_eq!(
            empty.previous_before(&"1".into()).unwrap_err(),
            PlayerError::EmptyQueue
        );
    }

    #[test]
    fn shuffle_is_a_permutation_led_by_current() {
        let mut q = queue(&["1", "2", "3", "4", "5", "6"]);
        let mut rng = StdRng::seed_from_u64(7);
        q.set_shuffle(true, Some(&"4".into()), &mut rng);

        let order: Vec<&str> = q.order.iter().map(|&i| q.tracks[i].id.as_str()).collect();
        assert_eq!(order[0], "4");
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["1", "2", "3", "4", "5", "6"]);

        // Walking the shuffled order still cycles back after N steps.
        let mut cur = TrackId::new("4");
        for _ in 0..q.len() {
            cur = q.next_after(&cur).unwrap().id.clone();
        }
        assert_eq!(cur.as_str(), "4");

        q.set_shuffle(false, None, &mut rng);
        let order: Vec<&str> = q.order.iter().map(|&i| q.tracks[i].id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn is_last_follows_play_order() {
        let q = queue(&["1", "2", "3"]);
        assert!(q.is_last(&"3".into()));
        assert!(!q.is_last(&"1".into()));
    }
}
