use crate::config;

/// Settings for this run, plus a warning when the config had to be ignored.
///
/// Runs before logging exists (the log file lives in the configured data
/// directory), so the warning is printed now and handed back for the log.
pub fn load_settings() -> (config::Settings, Option<String>) {
    let problem = match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => return (s, None),
            Err(msg) => format!("invalid config, using defaults: {msg}"),
        },
        Err(e) => format!("failed to load config, using defaults: {e}"),
    };
    eprintln!("micfight: {problem}");
    (config::Settings::default(), Some(problem))
}

/// Record where settings came from once the logger is up.
pub fn log_settings(settings: &config::Settings, problem: Option<&str>) {
    match config::resolve_config_path() {
        Some(path) if path.exists() => log::info!("[Config] {}", path.display()),
        _ => log::info!("[Config] no config file, using defaults"),
    }
    if let Some(problem) = problem {
        log::warn!("[Config] {problem}");
    }
    log::debug!(
        "[Config] repeat={:?} shuffle={} karaoke={}",
        settings.playback.repeat,
        settings.playback.shuffle,
        settings.ui.start_in_karaoke
    );
}
