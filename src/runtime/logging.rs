use std::fs::{self, OpenOptions};
use std::path::Path;

/// Send logs to `<data_dir>/micfight.log`; the terminal belongs to the TUI.
/// `RUST_LOG` picks the level, `info` by default.
pub fn init(data_dir: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder
        .filter_module("symphonia", log::LevelFilter::Warn)
        .filter_module("lofty", log::LevelFilter::Warn);

    let path = data_dir.join("micfight.log");
    let file = fs::create_dir_all(data_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("micfight: cannot open {}: {e}; logging disabled", path.display());
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    // A logger installed earlier (tests) wins.
    let _ = builder.try_init();
    log::info!(
        "[Main] Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
}
