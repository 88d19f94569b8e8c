use std::path::PathBuf;

use serde::Deserialize;

use crate::player::RepeatMode;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/micfight/config.toml` or `~/.config/micfight/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MICFIGHT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub catalog: CatalogSettings,
    pub storage: StorageSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume at startup, `0.0..=1.0`.
    pub initial_volume: f32,
    /// How often the audio thread reports position and checks for track end
    /// (milliseconds).
    pub poll_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            poll_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// What happens when a track ends.
    pub repeat: RepeatModeSetting,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            repeat: RepeatModeSetting::All,
            shuffle: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "loop-all", alias = "loop_all", alias = "repeat-all")]
    All,
    #[serde(alias = "loop-one", alias = "loop_one", alias = "repeat-one")]
    One,
    #[serde(alias = "no-loop", alias = "no_loop", alias = "none")]
    Off,
}

impl From<RepeatModeSetting> for RepeatMode {
    fn from(s: RepeatModeSetting) -> Self {
        match s {
            RepeatModeSetting::All => RepeatMode::All,
            RepeatModeSetting::One => RepeatMode::One,
            RepeatModeSetting::Off => RepeatMode::Off,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to seek when pressing `H` / `L`.
    pub seek_seconds: u64,
    /// Volume change per `+` / `-` press.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Manifest file (`.toml` / `.json`) or music directory. The command line
    /// argument wins over this.
    pub source: Option<PathBuf>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: None,
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where favorites, libraries, playlists and the log file live.
    /// Defaults to `$XDG_DATA_HOME/micfight` or `~/.local/share/micfight`.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Open on the karaoke track list instead of the full catalog.
    pub start_in_karaoke: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ MicFight: sing it like you mean it ~ ".to_string(),
            start_in_karaoke: false,
        }
    }
}
