use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Prompt};
use crate::catalog::TrackId;
use crate::config;
use crate::player::{MediaEngine, Notice, PlaybackController, PlayerError};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Last track seen as current, used to move the cursor along with
    /// auto-advance.
    last_current: Option<TrackId>,
}

/// Main terminal event loop: handles input, drains engine events and draws.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<E: MediaEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController<E>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        sync(app, player, state);

        let display = app.display_indices();
        terminal.draw(|f| {
            ui::draw(
                f,
                app,
                player.state(),
                &display,
                &settings.ui,
                &settings.controls,
            )
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply engine events, surface notices, and keep the player's queue equal to
/// the visible list.
fn sync<E: MediaEngine>(
    app: &mut App,
    player: &mut PlaybackController<E>,
    state: &mut EventLoopState,
) {
    player.pump();
    for notice in player.drain_notices() {
        app.push_notice(notice);
    }

    if app.queue_dirty {
        player.set_queue(app.queue_tracks());
        app.clear_queue_dirty();
    }

    let current = player.current_id().cloned();
    if current != state.last_current {
        if let (Some(id), None) = (current.as_ref(), app.prompt) {
            app.follow(id);
        }
        state.last_current = current;
    }
}

/// Commands report their own notices; here they only need logging.
fn log_result(what: &str, result: Result<(), PlayerError>) {
    if let Err(e) = result {
        log::debug!("[Input] {what}: {e}");
    }
}

fn handle_prompt_key(key: KeyEvent, prompt: Prompt, app: &mut App) {
    match prompt {
        Prompt::Search => match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Enter => app.exit_prompt(),
            KeyCode::Char('j') | KeyCode::Char('n')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                app.select_next()
            }
            KeyCode::Char('k') | KeyCode::Char('p')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                app.select_prev()
            }
            KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
            _ => {}
        },
        Prompt::NewPlaylist | Prompt::NewLibrary => match key.code {
            KeyCode::Esc => app.exit_prompt(),
            KeyCode::Backspace => {
                app.name_input.pop();
            }
            KeyCode::Enter => {
                if let Err(e) = app.submit_name() {
                    log::debug!("[Input] create collection: {e}");
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.name_input.push(c),
            _ => {}
        },
    }
}

fn handle_key_event<E: MediaEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController<E>,
) -> Result<bool, Box<dyn std::error::Error>> {
    if let Some(prompt) = app.prompt {
        // Enter in search mode also loads the highlighted track.
        let load_after = prompt == Prompt::Search && key.code == KeyCode::Enter;
        handle_prompt_key(key, prompt, app);
        if load_after {
            load_selected(app, player);
        }
        return Ok(false);
    }

    let seek = settings.controls.seek_seconds as f64;
    let step = settings.controls.volume_step;

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Home => {
            if let Some(&first) = app.display_indices().first() {
                app.selected = first;
            }
        }
        KeyCode::End | KeyCode::Char('G') => {
            if let Some(&last) = app.display_indices().last() {
                app.selected = last;
            }
        }
        KeyCode::Enter => load_selected(app, player),
        KeyCode::Char('p') | KeyCode::Char(' ') => log_result("play/pause", player.toggle_play()),
        KeyCode::Char('l') => log_result("next", player.next()),
        KeyCode::Char('h') => log_result("previous", player.previous()),
        KeyCode::Char('L') => seek_by(app, player, seek),
        KeyCode::Char('H') => seek_by(app, player, -seek),
        KeyCode::Char('+') | KeyCode::Char('=') => player.nudge_volume(step),
        KeyCode::Char('-') => player.nudge_volume(-step),
        KeyCode::Char('m') => player.toggle_mute(),
        KeyCode::Char('s') => {
            let on = player.toggle_shuffle();
            app.push_notice(Notice::info(
                if on { "Shuffle on" } else { "Shuffle off" },
                None,
            ));
        }
        KeyCode::Char('r') => {
            let mode = player.cycle_repeat();
            app.push_notice(Notice::info(format!("Repeat: {}", mode.label()), None));
        }
        KeyCode::Char('f') => {
            if let Err(e) = app.toggle_favorite_selected() {
                log::error!("[Store] saving favorites failed: {e}");
                app.push_notice(Notice::error("Could not save favorites", Some(e.to_string())));
            }
        }
        KeyCode::Char('K') => app.toggle_karaoke_view(),
        KeyCode::Char('v') => app.cycle_view(),
        KeyCode::Char('g') => app.cycle_genre(),
        KeyCode::Char('d') => app.cycle_difficulty(),
        KeyCode::Char('N') => app.start_naming(Prompt::NewPlaylist),
        KeyCode::Char('B') => app.start_naming(Prompt::NewLibrary),
        KeyCode::Char('a') => {
            if let Err(e) = app.add_selected_to_playlist() {
                app.push_notice(Notice::error(e.to_string(), None));
            }
        }
        KeyCode::Char('x') => {
            if let Err(e) = app.remove_selected_from_view() {
                app.push_notice(Notice::error(e.to_string(), None));
            }
        }
        KeyCode::Char('i') => app.toggle_metadata_window(),
        _ => {}
    }

    Ok(false)
}

/// Start the highlighted track, or toggle play when it is already loaded.
fn load_selected<E: MediaEngine>(app: &mut App, player: &mut PlaybackController<E>) {
    let Some(track) = app.selected_track().cloned() else {
        return;
    };
    let loaded = player.state().current.as_ref();
    if loaded.is_some_and(|current| current.same_track(&track)) {
        log_result("play/pause", player.toggle_play());
    } else {
        player.play_track(track);
    }
}

fn seek_by<E: MediaEngine>(app: &mut App, player: &mut PlaybackController<E>, delta: f64) {
    if let Err(e) = player.seek_by(delta) {
        app.push_notice(Notice::from_error(&e));
    }
}
