//! The playback controller: owns the engine, the queue and the playback state.
//!
//! Commands mutate state and issue engine calls. Engine events flow back
//! through `pump`/`handle` and are applied only when they belong to the
//! current generation, so a late settlement for a track the user already
//! left can never touch the state of the track now loaded.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use rand::Rng;

use crate::catalog::{Track, TrackId};

use super::engine::MediaEngine;
use super::error::{MediaFailure, PlayerError};
use super::queue::Queue;
use super::types::{
    EngineEvent, EngineMessage, Generation, Notice, PlaybackState, PlayerStatus, RepeatMode,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

pub struct PlaybackController<E: MediaEngine> {
    engine: E,
    events: Receiver<EngineMessage>,
    state: PlaybackState,
    queue: Queue,
    generation: Generation,
    /// The engine reported `CanPlay` for the current generation.
    ready: bool,
    /// A play request for the current generation has not settled yet.
    pending_play: bool,
    /// Issue a play request as soon as the current generation becomes ready.
    play_when_ready: bool,
    notices: Vec<Notice>,
}

impl<E: MediaEngine> PlaybackController<E> {
    pub fn new(mut engine: E, volume: f32) -> Self {
        let (tx, rx) = mpsc::channel::<EngineMessage>();
        engine.subscribe(tx);

        let state = PlaybackState::new(volume);
        engine.set_volume(state.effective_volume());

        Self {
            engine,
            events: rx,
            state,
            queue: Queue::default(),
            generation: Generation::default(),
            ready: false,
            pending_play: false,
            play_when_ready: false,
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_id(&self) -> Option<&TrackId> {
        self.state.current.as_ref().map(|t| &t.id)
    }

    /// Take the notices queued since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Replace the queue. The loaded track is left alone even if the new queue
    /// does not contain it.
    pub fn set_queue(&mut self, tracks: Vec<Arc<Track>>) {
        self.queue = Queue::new(tracks);
        if self.state.shuffle {
            let current = self.state.current.as_ref().map(|t| t.id.clone());
            self.queue
                .set_shuffle(true, current.as_ref(), &mut rand::rng());
        }
        log::debug!("[Player] queue replaced ({} tracks)", self.queue.len());
    }

    /// Load `track` without starting it.
    pub fn select_track(&mut self, track: Arc<Track>) {
        self.generation = self.generation.next();
        self.ready = false;
        self.pending_play = false;
        self.play_when_ready = false;

        log::debug!(
            "[Player] select {} ({}) gen={}",
            track.id,
            track.title,
            self.generation.0
        );
        self.engine.load(self.generation, &track.source_url);
        self.notices.push(Notice::info(
            "Now Playing",
            Some(format!("{} by {}", track.title, track.artist)),
        ));

        self.state.current = Some(track);
        self.state.current_time = 0.0;
        self.state.duration = None;
        self.state.is_playing = false;
        self.state.status = PlayerStatus::Loaded;
    }

    /// Load `track` and start it as soon as the engine can play it.
    pub fn play_track(&mut self, track: Arc<Track>) {
        self.select_track(track);
        self.play_when_ready = true;
    }

    /// Load the queued track with `id`.
    #[cfg(test)]
    pub fn select_by_id(&mut self, id: &TrackId) -> Result<(), PlayerError> {
        let track = self
            .queue
            .get(id)
            .cloned()
            .ok_or_else(|| PlayerError::NotFound(id.clone()))?;
        self.select_track(track);
        Ok(())
    }

    pub fn play(&mut self) -> Result<(), PlayerError> {
        let Some(track) = self.state.current.clone() else {
            return Err(self.report(PlayerError::NoTrackLoaded));
        };

        if self.state.status == PlayerStatus::Playing || self.pending_play {
            return Ok(());
        }

        if !self.ready {
            if matches!(self.state.status, PlayerStatus::Error(_)) {
                // A failed load can't become ready on its own; pressing play again
                // reloads the source and starts it once it can play.
                log::debug!("[Player] retrying {} after error", track.id);
                self.select_track(track);
                self.play_when_ready = true;
                return Ok(());
            }
            return Err(self.report(PlayerError::NotReady));
        }

        log::debug!("[Player] play gen={}", self.generation.0);
        self.pending_play = true;
        self.engine.request_play(self.generation);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.play_when_ready = false;
        if self.state.is_playing || self.pending_play {
            log::debug!("[Player] pause gen={}", self.generation.0);
            self.pending_play = false;
            self.engine.pause();
        }
    }

    pub fn toggle_play(&mut self) -> Result<(), PlayerError> {
        if self.state.is_playing || self.pending_play {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Jump to `seconds`, clamped to the track. Play/pause state is untouched.
    pub fn seek(&mut self, seconds: f64) -> Result<(), PlayerError> {
        if self.state.current.is_none() {
            return Err(PlayerError::NoTrackLoaded);
        }

        let mut target = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
        if let Some(d) = self.state.duration {
            target = target.min(d);
        }

        self.engine.set_position(target);
        self.state.current_time = target;
        Ok(())
    }

    pub fn seek_by(&mut self, delta: f64) -> Result<(), PlayerError> {
        self.seek(self.state.current_time + delta)
    }

    /// Set the volume, clamped to `0.0..=1.0`. Zero mutes and keeps the last
    /// audible volume for restoration; anything above zero unmutes.
    pub fn set_volume(&mut self, volume: f32) {
        let v = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        if v == 0.0 {
            self.state.muted = true;
        } else {
            self.state.volume = v;
            self.state.muted = false;
        }
        self.engine.set_volume(self.state.effective_volume());
    }

    /// Step the volume by `delta`, starting from the chosen volume even while
    /// muted.
    pub fn nudge_volume(&mut self, delta: f32) {
        self.set_volume(self.state.volume + delta);
    }

    pub fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        self.engine.set_volume(self.state.effective_volume());
    }

    pub fn next(&mut self) -> Result<(), PlayerError> {
        self.advance(Direction::Next).map_err(|e| self.report(e))
    }

    pub fn previous(&mut self) -> Result<(), PlayerError> {
        self.advance(Direction::Previous).map_err(|e| self.report(e))
    }

    /// Select the neighbouring track and keep the session playing.
    fn advance(&mut self, direction: Direction) -> Result<(), PlayerError> {
        if self.queue.is_empty() {
            return Err(PlayerError::EmptyQueue);
        }
        let Some(current) = self.current_id().cloned() else {
            return Err(PlayerError::NoTrackLoaded);
        };

        let target = match direction {
            Direction::Next => self.queue.next_after(&current)?,
            Direction::Previous => self.queue.previous_before(&current)?,
        };
        self.select_track(target);
        self.play_when_ready = true;
        Ok(())
    }

    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.state.repeat = self.state.repeat.cycle();
        self.state.repeat
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.state.repeat = repeat;
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        let on = !self.state.shuffle;
        self.set_shuffle_with(on, &mut rand::rng());
        on
    }

    pub fn set_shuffle_with<R: Rng + ?Sized>(&mut self, shuffle: bool, rng: &mut R) {
        self.state.shuffle = shuffle;
        let current = self.state.current.as_ref().map(|t| t.id.clone());
        self.queue.set_shuffle(shuffle, current.as_ref(), rng);
    }

    /// Apply every engine event received so far. Returns how many were read.
    pub fn pump(&mut self) -> usize {
        let mut n = 0;
        while let Ok(msg) = self.events.try_recv() {
            self.handle(msg);
            n += 1;
        }
        n
    }

    pub fn handle(&mut self, msg: EngineMessage) {
        if msg.generation != self.generation {
            log::trace!(
                "[Player] dropping stale {:?} (gen={} current={})",
                msg.event,
                msg.generation.0,
                self.generation.0
            );
            return;
        }

        match msg.event {
            EngineEvent::LoadedMetadata { duration } => {
                if duration.is_finite() && duration >= 0.0 {
                    self.state.duration = Some(duration);
                    self.state.current_time = self.state.current_time.min(duration);
                }
            }
            EngineEvent::CanPlay => {
                self.ready = true;
                if self.play_when_ready {
                    self.play_when_ready = false;
                    // Errors are already reported as notices.
                    let _ = self.play();
                }
            }
            EngineEvent::TimeUpdate { position } => {
                if position.is_finite() {
                    let mut p = position.max(0.0);
                    if let Some(d) = self.state.duration {
                        p = p.min(d);
                    }
                    self.state.current_time = p;
                }
            }
            EngineEvent::Play => {
                self.state.is_playing = true;
                self.state.status = PlayerStatus::Playing;
            }
            EngineEvent::Pause => {
                self.state.is_playing = false;
                if matches!(
                    self.state.status,
                    PlayerStatus::Playing | PlayerStatus::Loaded | PlayerStatus::Paused
                ) {
                    self.state.status = PlayerStatus::Paused;
                }
            }
            EngineEvent::PlayResolved(Ok(())) => {
                self.pending_play = false;
            }
            EngineEvent::PlayResolved(Err(MediaFailure::Blocked)) => {
                self.pending_play = false;
                self.state.is_playing = false;
                self.state.status = PlayerStatus::Paused;
                log::info!("[Player] autoplay blocked for gen={}", self.generation.0);
                self.report(PlayerError::AutoplayBlocked);
            }
            EngineEvent::PlayResolved(Err(failure)) | EngineEvent::Error(failure) => {
                self.fail(failure.into());
            }
            EngineEvent::Ended => {
                self.pending_play = false;
                self.state.is_playing = false;
                if let Some(d) = self.state.duration {
                    self.state.current_time = d;
                }
                self.state.status = PlayerStatus::Ended;
                self.on_ended();
            }
        }
    }

    fn on_ended(&mut self) {
        let Some(current) = self.state.current.clone() else {
            return;
        };

        let result = match self.state.repeat {
            _ if self.queue.is_empty() => Err(PlayerError::EmptyQueue),
            RepeatMode::One => {
                self.select_track(current);
                self.play_when_ready = true;
                Ok(())
            }
            RepeatMode::All => self.advance(Direction::Next),
            RepeatMode::Off => {
                if self.queue.is_last(&current.id) || !self.queue.contains(&current.id) {
                    log::debug!("[Player] end of queue reached");
                    Ok(())
                } else {
                    self.advance(Direction::Next)
                }
            }
        };

        match result {
            Ok(()) => {}
            Err(PlayerError::EmptyQueue) => {
                log::debug!("[Player] queue empty after end of track, going idle");
                self.engine.unload();
                self.state.current = None;
                self.state.current_time = 0.0;
                self.state.duration = None;
                self.state.status = PlayerStatus::Idle;
            }
            Err(e) => {
                log::debug!("[Player] no auto-advance: {e}");
            }
        }
    }

    fn fail(&mut self, err: PlayerError) {
        log::warn!(
            "[Player] {} failure on gen={}: {err}",
            err.category(),
            self.generation.0
        );
        self.ready = false;
        self.pending_play = false;
        self.play_when_ready = false;
        self.state.is_playing = false;
        self.state.status = PlayerStatus::Error(err.clone());
        self.notices.push(Notice::from_error(&err));
    }

    /// Queue a notice for `err` and hand it back for returning.
    fn report(&mut self, err: PlayerError) -> PlayerError {
        self.notices.push(Notice::from_error(&err));
        err
    }
}

impl<E: MediaEngine> Drop for PlaybackController<E> {
    fn drop(&mut self) {
        self.engine.unload();
    }
}
