use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::player::{Notice, PlaybackController, RodioEngine};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    let data_dir = settings.data_dir();
    logging::init(&data_dir);
    settings::log_settings(&settings, config_problem.as_deref());

    let source = startup::catalog_source(env::args().nth(1), &settings);
    let catalog = startup::load_catalog(&source, &settings);
    let (user, user_notice) = startup::load_user_data(&data_dir);

    let mut app = App::new(catalog.tracks, user);
    app.catalog_name = catalog.name;
    let config_notice = config_problem.map(|p| Notice::warning("Config ignored", Some(p)));
    for notice in [config_notice, catalog.notice, user_notice].into_iter().flatten() {
        app.push_notice(notice);
    }

    let engine = RodioEngine::open(&settings.audio)?;
    let mut player = PlaybackController::new(engine, settings.audio.initial_volume);
    startup::apply_playback_defaults(&mut app, &mut player, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut player, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(player);
    log::info!("[Main] shut down");
    run_result
}
