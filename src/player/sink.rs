//! Opening a track source and preparing a paused `rodio` sink for it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::error::MediaFailure;

/// Turn a catalog `source_url` into a local path. Remote URLs can't be fetched
/// by the local engine and are reported as network failures.
pub(super) fn local_path(source: &str) -> Result<PathBuf, MediaFailure> {
    if let Some(rest) = source.strip_prefix("file://") {
        return Ok(PathBuf::from(rest));
    }
    if source.contains("://") {
        return Err(MediaFailure::Network(format!(
            "cannot fetch remote source {source}"
        )));
    }
    Ok(PathBuf::from(source))
}

/// Duration from the container headers, used when the decoder can't tell.
fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Create a paused sink for `path` and report the source duration if known.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<(Sink, Option<Duration>), MediaFailure> {
    let file = File::open(path)
        .map_err(|e| MediaFailure::Network(format!("failed to open {}: {e}", path.display())))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| MediaFailure::Decode(format!("failed to decode {}: {e}", path.display())))?;
    let duration = source.total_duration().or_else(|| probe_duration(path));

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.set_volume(volume);
    sink.append(source);
    Ok((sink, duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_accepts_plain_and_file_urls() {
        assert_eq!(
            local_path("/music/a.mp3").unwrap(),
            PathBuf::from("/music/a.mp3")
        );
        assert_eq!(
            local_path("file:///music/a.mp3").unwrap(),
            PathBuf::from("/music/a.mp3")
        );
    }

    #[test]
    fn local_path_rejects_remote_sources_as_network() {
        assert!(matches!(
            local_path("https://cdn.example.com/a.mp3"),
            Err(MediaFailure::Network(_))
        ));
    }
}
