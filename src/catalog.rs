//! Track catalog: the data model and the providers that supply tracks.
//!
//! A provider returns an ordered list of validated `Track` records. Two
//! providers exist: a manifest file (TOML/JSON) and a directory scan.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::CatalogSettings;

mod filter;
mod manifest;
mod model;
mod scan;

pub use filter::{TrackFilter, matches_query};
pub use manifest::{ManifestCatalog, parse_manifest};
pub use model::*;
pub use scan::DirCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog manifest: {0}")]
    Parse(String),
    #[error("invalid track record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("duplicate track id {0}")]
    DuplicateId(TrackId),
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

pub trait CatalogProvider {
    /// All tracks matching `filter`, in catalog order.
    fn list_tracks(&self, filter: &TrackFilter) -> Result<Vec<Track>, CatalogError>;

    /// Tracks flagged for karaoke, in catalog order.
    fn list_karaoke_tracks(&self) -> Result<Vec<Track>, CatalogError> {
        self.list_tracks(&TrackFilter::karaoke())
    }

    /// Human-readable origin, shown in the status bar.
    fn describe(&self) -> String;
}

/// Open `source` as a manifest when it is a `.toml`/`.json` file, otherwise scan it
/// as a music directory.
pub fn open(
    source: &Path,
    settings: &CatalogSettings,
) -> Result<Box<dyn CatalogProvider>, CatalogError> {
    let is_manifest = source.is_file()
        && source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("toml") || e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

    if is_manifest {
        Ok(Box::new(ManifestCatalog::open(source)?))
    } else {
        Ok(Box::new(DirCatalog::open(source, settings)?))
    }
}

#[cfg(test)]
mod tests;
