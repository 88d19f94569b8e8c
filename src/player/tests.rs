use super::*;
use crate::catalog::{Track, TrackId};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(Generation, String),
    Play(Generation),
    Pause,
    Seek(f64),
    Volume(f32),
    Unload,
}

#[derive(Default)]
struct Shared {
    calls: Vec<Call>,
    events: Option<Sender<EngineMessage>>,
    generation: Generation,
}

/// Engine double: records every call and lets the test script events.
#[derive(Clone, Default)]
struct FakeEngine(Rc<RefCell<Shared>>);

impl FakeEngine {
    fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    fn play_requests(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Play(_)))
            .count()
    }

    /// Generation of the most recent load.
    fn generation(&self) -> Generation {
        self.0.borrow().generation
    }

    fn emit_for(&self, generation: Generation, event: EngineEvent) {
        let s = self.0.borrow();
        s.events
            .as_ref()
            .unwrap()
            .send(EngineMessage::new(generation, event))
            .unwrap();
    }

    fn emit(&self, event: EngineEvent) {
        self.emit_for(self.generation(), event);
    }

    /// Report metadata and readiness for the current load.
    fn ready(&self, duration: f64) {
        self.emit(EngineEvent::LoadedMetadata { duration });
        self.emit(EngineEvent::CanPlay);
    }

    /// Settle the latest play request successfully.
    fn confirm_play(&self) {
        self.emit(EngineEvent::PlayResolved(Ok(())));
        self.emit(EngineEvent::Play);
    }
}

impl MediaEngine for FakeEngine {
    fn subscribe(&mut self, events: Sender<EngineMessage>) {
        self.0.borrow_mut().events = Some(events);
    }

    fn load(&mut self, generation: Generation, source: &str) {
        let mut s = self.0.borrow_mut();
        s.generation = generation;
        s.calls.push(Call::Load(generation, source.to_string()));
    }

    fn request_play(&mut self, generation: Generation) {
        self.0.borrow_mut().calls.push(Call::Play(generation));
    }

    fn pause(&mut self) {
        self.0.borrow_mut().calls.push(Call::Pause);
    }

    fn set_position(&mut self, seconds: f64) {
        self.0.borrow_mut().calls.push(Call::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f32) {
        self.0.borrow_mut().calls.push(Call::Volume(volume));
    }

    fn unload(&mut self) {
        self.0.borrow_mut().calls.push(Call::Unload);
    }
}

fn track(id: &str) -> Arc<Track> {
    Arc::new(Track {
        id: TrackId::new(id),
        title: format!("Song {id}"),
        artist: "Artist".to_string(),
        album: None,
        source_url: format!("/music/{id}.mp3"),
        duration_hint: None,
        is_karaoke_track: false,
        is_competition_eligible: false,
        cover_image_url: None,
        genre: None,
        difficulty: None,
    })
}

fn controller_with(ids: &[&str]) -> (PlaybackController<FakeEngine>, FakeEngine) {
    let engine = FakeEngine::default();
    let mut c = PlaybackController::new(engine.clone(), 0.8);
    c.set_queue(ids.iter().map(|id| track(id)).collect());
    (c, engine)
}

fn current(c: &PlaybackController<FakeEngine>) -> Option<&str> {
    c.current_id().map(TrackId::as_str)
}

/// Select, become ready, play and confirm.
fn start(c: &mut PlaybackController<FakeEngine>, engine: &FakeEngine, id: &str) {
    c.select_by_id(&TrackId::new(id)).unwrap();
    engine.ready(200.0);
    c.pump();
    c.play().unwrap();
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
}

#[test]
fn starts_idle_with_initial_volume() {
    let (c, engine) = controller_with(&["1"]);
    assert_eq!(c.state().status, PlayerStatus::Idle);
    assert!(c.state().current.is_none());
    assert_eq!(engine.calls(), vec![Call::Volume(0.8)]);
}

#[test]
fn select_loads_without_playing() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.ready(180.0);
    c.pump();

    assert_eq!(current(&c), Some("1"));
    assert_eq!(c.state().status, PlayerStatus::Loaded);
    assert!(!c.state().is_playing);
    assert_eq!(c.state().current_time, 0.0);
    assert_eq!(c.state().duration, Some(180.0));
    assert_eq!(engine.play_requests(), 0);
    assert!(engine
        .calls()
        .contains(&Call::Load(engine.generation(), "/music/1.mp3".to_string())));
}

#[test]
fn select_resets_position_of_previous_track() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    start(&mut c, &engine, "1");
    engine.emit(EngineEvent::TimeUpdate { position: 42.0 });
    c.pump();
    assert_eq!(c.state().current_time, 42.0);

    c.select_by_id(&"2".into()).unwrap();
    assert_eq!(c.state().current_time, 0.0);
    assert_eq!(c.state().duration, None);
    assert!(!c.state().is_playing);
    assert_eq!(c.state().status, PlayerStatus::Loaded);
}

#[test]
fn play_track_starts_once_ready() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    c.play_track(track("2"));
    assert_eq!(engine.play_requests(), 0);
    assert_eq!(c.state().status, PlayerStatus::Loaded);

    engine.ready(120.0);
    c.pump();
    assert_eq!(engine.play_requests(), 1);
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
    assert_eq!(current(&c), Some("2"));
}

#[test]
fn pause_before_ready_cancels_pending_autoplay() {
    let (mut c, engine) = controller_with(&["1"]);
    c.play_track(track("1"));
    c.pause();
    engine.ready(120.0);
    c.pump();
    assert_eq!(engine.play_requests(), 0);
    assert!(!c.state().is_playing);
}

#[test]
fn play_waits_for_engine_confirmation() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.ready(100.0);
    c.pump();

    c.play().unwrap();
    assert!(!c.state().is_playing);
    assert_eq!(engine.play_requests(), 1);

    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
    assert_eq!(c.state().status, PlayerStatus::Playing);
}

#[test]
fn play_before_ready_is_rejected_without_engine_call() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    c.drain_notices();

    assert_eq!(c.play(), Err(PlayerError::NotReady));
    assert_eq!(engine.play_requests(), 0);
    assert_eq!(c.state().status, PlayerStatus::Loaded);

    let notices = c.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Not ready yet");
}

#[test]
fn play_without_track_reports_no_track() {
    let (mut c, _engine) = controller_with(&["1"]);
    assert_eq!(c.play(), Err(PlayerError::NoTrackLoaded));
    assert_eq!(c.state().status, PlayerStatus::Idle);
}

#[test]
fn repeated_play_while_pending_issues_one_request() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.ready(100.0);
    c.pump();

    c.play().unwrap();
    c.play().unwrap();
    assert_eq!(engine.play_requests(), 1);
}

#[test]
fn autoplay_blocked_pauses_and_asks_for_gesture() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.ready(100.0);
    c.pump();
    c.drain_notices();

    c.play().unwrap();
    engine.emit(EngineEvent::PlayResolved(Err(MediaFailure::Blocked)));
    c.pump();

    assert_eq!(c.state().status, PlayerStatus::Paused);
    assert!(!c.state().is_playing);
    let notices = c.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Autoplay blocked");
    assert_eq!(notices[0].level, NoticeLevel::Warning);

    // Pressing play again goes back to the engine.
    c.play().unwrap();
    assert_eq!(engine.play_requests(), 2);
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
}

#[test]
fn decode_failure_sets_error_and_play_retries_by_reloading() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    let first_gen = engine.generation();
    engine.emit(EngineEvent::Error(MediaFailure::Decode("bad frame".into())));
    c.pump();

    match &c.state().status {
        PlayerStatus::Error(e) => assert_eq!(e.category(), "decode"),
        other => panic!("expected error state, got {other:?}"),
    }
    assert!(!c.state().is_playing);

    c.play().unwrap();
    assert!(engine.generation() > first_gen);
    assert_eq!(c.state().status, PlayerStatus::Loaded);

    engine.ready(90.0);
    c.pump();
    assert_eq!(engine.play_requests(), 1);
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
}

#[test]
fn network_rejection_of_play_is_an_error_state() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.ready(90.0);
    c.pump();
    c.play().unwrap();
    engine.emit(EngineEvent::PlayResolved(Err(MediaFailure::Network(
        "connection reset".into(),
    ))));
    c.pump();

    assert_eq!(
        c.state().status,
        PlayerStatus::Error(PlayerError::Network("connection reset".into()))
    );
}

#[test]
fn error_does_not_block_selecting_another_track() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    c.select_by_id(&"1".into()).unwrap();
    engine.emit(EngineEvent::Error(MediaFailure::Network("404".into())));
    c.pump();

    start(&mut c, &engine, "2");
    assert_eq!(current(&c), Some("2"));
    assert_eq!(c.state().status, PlayerStatus::Playing);
}

#[test]
fn late_play_for_previous_track_is_ignored() {
    let (mut c, engine) = controller_with(&["A", "B"]);
    c.select_by_id(&"A".into()).unwrap();
    let gen_a = engine.generation();
    engine.ready(100.0);
    c.pump();
    c.play().unwrap();

    // The user switches before A's play request settles.
    c.select_by_id(&"B".into()).unwrap();
    engine.emit_for(gen_a, EngineEvent::PlayResolved(Ok(())));
    engine.emit_for(gen_a, EngineEvent::Play);
    engine.emit_for(gen_a, EngineEvent::TimeUpdate { position: 12.0 });
    c.pump();

    assert_eq!(current(&c), Some("B"));
    assert!(!c.state().is_playing);
    assert_eq!(c.state().status, PlayerStatus::Loaded);
    assert_eq!(c.state().current_time, 0.0);

    // B's own events still apply.
    engine.ready(50.0);
    c.pump();
    c.play().unwrap();
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
    assert_eq!(current(&c), Some("B"));
}

#[test]
fn late_failure_for_previous_track_is_ignored() {
    let (mut c, engine) = controller_with(&["A", "B"]);
    c.select_by_id(&"A".into()).unwrap();
    let gen_a = engine.generation();
    c.select_by_id(&"B".into()).unwrap();

    engine.emit_for(gen_a, EngineEvent::Error(MediaFailure::Decode("x".into())));
    engine.emit_for(gen_a, EngineEvent::Ended);
    c.pump();
    assert_eq!(c.state().status, PlayerStatus::Loaded);
    assert_eq!(current(&c), Some("B"));
}

#[test]
fn last_engine_event_wins_for_is_playing() {
    let (mut c, engine) = controller_with(&["1"]);
    start(&mut c, &engine, "1");
    engine.emit(EngineEvent::Pause);
    engine.emit(EngineEvent::Play);
    engine.emit(EngineEvent::Pause);
    c.pump();
    assert!(!c.state().is_playing);
    assert_eq!(c.state().status, PlayerStatus::Paused);
}

#[test]
fn pause_is_confirmed_by_engine_event() {
    let (mut c, engine) = controller_with(&["1"]);
    start(&mut c, &engine, "1");

    c.pause();
    assert!(engine.calls().contains(&Call::Pause));
    assert!(c.state().is_playing);

    engine.emit(EngineEvent::Pause);
    c.pump();
    assert!(!c.state().is_playing);
    assert_eq!(c.state().status, PlayerStatus::Paused);
}

#[test]
fn pause_when_not_playing_does_nothing() {
    let (mut c, engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    c.pause();
    assert!(!engine.calls().contains(&Call::Pause));
}

#[test]
fn seek_clamps_to_track_bounds_and_keeps_play_state() {
    let (mut c, engine) = controller_with(&["1"]);
    start(&mut c, &engine, "1");

    c.seek(-5.0).unwrap();
    assert_eq!(c.state().current_time, 0.0);
    c.seek(200.0 + 100.0).unwrap();
    assert_eq!(c.state().current_time, 200.0);
    c.seek(30.5).unwrap();
    assert_eq!(c.state().current_time, 30.5);
    assert!(c.state().is_playing);

    let seeks: Vec<Call> = engine
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Seek(_)))
        .collect();
    assert_eq!(seeks, vec![Call::Seek(0.0), Call::Seek(200.0), Call::Seek(30.5)]);
}

#[test]
fn seek_without_track_is_rejected() {
    let (mut c, _engine) = controller_with(&["1"]);
    assert_eq!(c.seek(10.0), Err(PlayerError::NoTrackLoaded));
}

#[test]
fn seek_before_metadata_only_clamps_low() {
    let (mut c, _engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    c.seek(75.0).unwrap();
    assert_eq!(c.state().current_time, 75.0);
    c.seek_by(-100.0).unwrap();
    assert_eq!(c.state().current_time, 0.0);
}

#[test]
fn toggle_mute_twice_restores_volume() {
    let (mut c, engine) = controller_with(&["1"]);
    c.set_volume(0.35);
    c.toggle_mute();
    assert!(c.state().muted);
    assert_eq!(c.state().effective_volume(), 0.0);
    c.toggle_mute();
    assert!(!c.state().muted);
    assert_eq!(c.state().volume, 0.35);

    let volumes: Vec<Call> = engine
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Volume(_)))
        .collect();
    assert_eq!(
        volumes,
        vec![
            Call::Volume(0.8),
            Call::Volume(0.35),
            Call::Volume(0.0),
            Call::Volume(0.35)
        ]
    );
}

#[test]
fn zero_volume_mutes_and_positive_volume_unmutes() {
    let (mut c, _engine) = controller_with(&["1"]);
    c.set_volume(0.6);
    c.set_volume(0.0);
    assert!(c.state().muted);
    assert_eq!(c.state().effective_volume(), 0.0);

    // Unmuting by toggle brings back the last audible level.
    c.toggle_mute();
    assert_eq!(c.state().effective_volume(), 0.6);

    c.toggle_mute();
    c.set_volume(0.4);
    assert!(!c.state().muted);
    assert_eq!(c.state().effective_volume(), 0.4);
}

#[test]
fn volume_steps_start_from_remembered_level_while_muted() {
    let (mut c, _engine) = controller_with(&["1"]);
    c.set_volume(0.5);
    c.toggle_mute();

    c.nudge_volume(0.25);
    assert!(!c.state().muted);
    assert_eq!(c.state().effective_volume(), 0.75);

    c.toggle_mute();
    c.nudge_volume(-0.25);
    assert!(!c.state().muted);
    assert_eq!(c.state().effective_volume(), 0.5);
}

#[test]
fn volume_is_clamped() {
    let (mut c, _engine) = controller_with(&["1"]);
    c.set_volume(3.0);
    assert_eq!(c.state().volume, 1.0);
    c.set_volume(-1.0);
    assert!(c.state().muted);
}

#[test]
fn next_autoplays_once_ready() {
    let (mut c, engine) = controller_with(&["1", "2", "3"]);
    start(&mut c, &engine, "1");

    c.next().unwrap();
    assert_eq!(current(&c), Some("2"));
    assert!(!c.state().is_playing);
    assert_eq!(engine.play_requests(), 1);

    engine.ready(100.0);
    c.pump();
    assert_eq!(engine.play_requests(), 2);
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
    assert_eq!(current(&c), Some("2"));
}

#[test]
fn next_n_times_comes_back_and_previous_next_is_identity() {
    let ids = ["1", "2", "3", "4"];
    let (mut c, _engine) = controller_with(&ids);
    c.select_by_id(&"3".into()).unwrap();

    for _ in 0..ids.len() {
        c.next().unwrap();
    }
    assert_eq!(current(&c), Some("3"));

    c.previous().unwrap();
    assert_eq!(current(&c), Some("2"));
    c.next().unwrap();
    assert_eq!(current(&c), Some("3"));
}

#[test]
fn next_on_empty_queue_stays_idle() {
    let (mut c, engine) = controller_with(&[]);
    assert_eq!(c.next(), Err(PlayerError::EmptyQueue));
    assert_eq!(c.previous(), Err(PlayerError::EmptyQueue));
    assert_eq!(c.state().status, PlayerStatus::Idle);
    assert!(!engine.calls().iter().any(|call| matches!(call, Call::Load(..))));
}

#[test]
fn next_for_track_outside_queue_is_not_found() {
    let (mut c, _engine) = controller_with(&["1", "2"]);
    c.select_track(track("99"));
    assert_eq!(c.next(), Err(PlayerError::NotFound("99".into())));
    assert_eq!(current(&c), Some("99"));
}

#[test]
fn end_of_track_advances_and_previous_goes_back() {
    let (mut c, engine) = controller_with(&["1", "2", "3"]);
    start(&mut c, &engine, "1");
    assert_eq!(current(&c), Some("1"));

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(current(&c), Some("2"));
    engine.ready(100.0);
    c.pump();
    engine.confirm_play();
    c.pump();
    assert_eq!(current(&c), Some("2"));
    assert!(c.state().is_playing);

    c.previous().unwrap();
    engine.ready(100.0);
    c.pump();
    engine.confirm_play();
    c.pump();
    assert_eq!(current(&c), Some("1"));
    assert!(c.state().is_playing);
}

#[test]
fn end_of_single_track_queue_loops_it() {
    let (mut c, engine) = controller_with(&["solo"]);
    start(&mut c, &engine, "solo");
    let gen_before = engine.generation();

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(current(&c), Some("solo"));
    assert!(engine.generation() > gen_before);

    engine.ready(100.0);
    c.pump();
    engine.confirm_play();
    c.pump();
    assert!(c.state().is_playing);
}

#[test]
fn end_with_repeat_one_replays_current() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    c.set_repeat(RepeatMode::One);
    start(&mut c, &engine, "1");

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(current(&c), Some("1"));
    engine.ready(100.0);
    c.pump();
    assert_eq!(engine.play_requests(), 2);
}

#[test]
fn end_with_repeat_off_rests_after_last_track() {
    let (mut c, engine) = controller_with(&["1", "2"]);
    c.set_repeat(RepeatMode::Off);
    start(&mut c, &engine, "2");

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(current(&c), Some("2"));
    assert_eq!(c.state().status, PlayerStatus::Ended);
    assert!(!c.state().is_playing);
    assert_eq!(c.state().current_time, 200.0);

    // Play from Ended restarts the track.
    c.play().unwrap();
    assert_eq!(engine.play_requests(), 2);
}

#[test]
fn end_with_empty_queue_goes_idle() {
    let (mut c, engine) = controller_with(&["1"]);
    start(&mut c, &engine, "1");
    c.set_queue(Vec::new());

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(c.state().status, PlayerStatus::Idle);
    assert!(c.state().current.is_none());
    assert!(engine.calls().contains(&Call::Unload));
}

#[test]
fn end_with_repeat_off_and_empty_queue_goes_idle() {
    let (mut c, engine) = controller_with(&["1"]);
    c.set_repeat(RepeatMode::Off);
    start(&mut c, &engine, "1");
    c.set_queue(Vec::new());

    engine.emit(EngineEvent::Ended);
    c.pump();
    assert_eq!(c.state().status, PlayerStatus::Idle);
    assert!(c.state().current.is_none());
    assert!(engine.calls().contains(&Call::Unload));
}

#[test]
fn karaoke_queue_never_leaks_into_full_catalog() {
    let mut k1 = (*track("k1")).clone();
    k1.is_karaoke_track = true;
    let mut k2 = (*track("k2")).clone();
    k2.is_karaoke_track = true;
    let catalog = vec![
        Arc::new(k1),
        track("plain1"),
        Arc::new(k2),
        track("plain2"),
    ];
    let karaoke: Vec<Arc<Track>> = catalog
        .iter()
        .filter(|t| t.is_karaoke_track)
        .cloned()
        .collect();

    let engine = FakeEngine::default();
    let mut c = PlaybackController::new(engine.clone(), 1.0);
    c.set_queue(karaoke);
    c.select_by_id(&"k1".into()).unwrap();

    for _ in 0..5 {
        c.next().unwrap();
        assert!(c.state().current.as_ref().unwrap().is_karaoke_track);
    }
}

#[test]
fn shuffle_keeps_current_track_and_covers_queue() {
    use rand::SeedableRng;
    let (mut c, _engine) = controller_with(&["1", "2", "3", "4"]);
    c.select_by_id(&"2".into()).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    c.set_shuffle_with(true, &mut rng);
    assert!(c.state().shuffle);

    let mut seen = Vec::new();
    for _ in 0..4 {
        c.next().unwrap();
        seen.push(current(&c).unwrap().to_string());
    }
    assert_eq!(seen.last().map(String::as_str), Some("2"));
    seen.sort();
    assert_eq!(seen, vec!["1", "2", "3", "4"]);
}

#[test]
fn cycle_repeat_goes_all_one_off() {
    let (mut c, _engine) = controller_with(&["1"]);
    assert_eq!(c.state().repeat, RepeatMode::All);
    assert_eq!(c.cycle_repeat(), RepeatMode::One);
    assert_eq!(c.cycle_repeat(), RepeatMode::Off);
    assert_eq!(c.cycle_repeat(), RepeatMode::All);
}

#[test]
fn selecting_announces_now_playing() {
    let (mut c, _engine) = controller_with(&["1"]);
    c.select_by_id(&"1".into()).unwrap();
    let notices = c.drain_notices();
    assert_eq!(notices[0].title, "Now Playing");
    assert_eq!(notices[0].description.as_deref(), Some("Song 1 by Artist"));
    assert!(c.drain_notices().is_empty());
}

#[test]
fn drop_unloads_engine() {
    let (c, engine) = controller_with(&["1"]);
    drop(c);
    assert_eq!(engine.calls().last(), Some(&Call::Unload));
}

#[test]
fn time_updates_clamp_to_duration() {
    let (mut c, engine) = controller_with(&["1"]);
    start(&mut c, &engine, "1");
    engine.emit(EngineEvent::TimeUpdate { position: 500.0 });
    c.pump();
    assert_eq!(c.state().current_time, 200.0);
    assert_eq!(c.state().progress(), 1.0);
}

#[test]
fn format_time_renders_minutes_and_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.9), "1:05");
    assert_eq!(format_time(355.0), "5:55");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}
