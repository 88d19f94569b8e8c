//! Settings for the player, the catalog and the stored collections.
//!
//! `Settings::load` layers `config.toml` under `MICFIGHT__SECTION__KEY`
//! environment overrides. Every section has defaults, so a missing file is
//! not an error.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
