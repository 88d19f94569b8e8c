use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::error::MediaFailure;
use super::sink::{create_sink, local_path};
use super::types::{EngineEvent, EngineMessage, Generation};

/// Commands understood by the audio thread.
#[derive(Debug)]
pub(super) enum EngineCmd {
    Subscribe(Sender<EngineMessage>),
    Load {
        generation: Generation,
        source: String,
    },
    Play(Generation),
    Pause,
    Seek(f64),
    Volume(f32),
    Unload,
    Quit,
}

struct Loaded {
    generation: Generation,
    path: PathBuf,
    sink: Sink,
}

struct AudioThread {
    stream: OutputStream,
    events: Option<Sender<EngineMessage>>,
    loaded: Option<Loaded>,
    playing: bool,
    volume: f32,
}

impl AudioThread {
    fn emit(&self, generation: Generation, event: EngineEvent) {
        if let Some(tx) = &self.events {
            // The controller going away just means nobody listens any more.
            let _ = tx.send(EngineMessage::new(generation, event));
        }
    }

    fn stop_current(&mut self) {
        if let Some(l) = self.loaded.take() {
            l.sink.stop();
        }
        self.playing = false;
    }

    fn load(&mut self, generation: Generation, source: &str) {
        self.stop_current();

        let opened = local_path(source).and_then(|path| {
            create_sink(&self.stream, &path, self.volume).map(|(sink, d)| (path, sink, d))
        });

        match opened {
            Ok((path, sink, duration)) => {
                log::debug!("[Engine] loaded {} gen={}", path.display(), generation.0);
                self.loaded = Some(Loaded {
                    generation,
                    path,
                    sink,
                });
                if let Some(d) = duration {
                    self.emit(
                        generation,
                        EngineEvent::LoadedMetadata {
                            duration: d.as_secs_f64(),
                        },
                    );
                }
                self.emit(generation, EngineEvent::CanPlay);
            }
            Err(failure) => {
                log::warn!("[Engine] load failed gen={}: {failure:?}", generation.0);
                self.emit(generation, EngineEvent::Error(failure));
            }
        }
    }

    fn play(&mut self, generation: Generation) {
        let Some(l) = self.loaded.as_ref() else {
            self.emit(
                generation,
                EngineEvent::PlayResolved(Err(MediaFailure::Decode(
                    "nothing loaded".to_string(),
                ))),
            );
            return;
        };
        if l.generation != generation {
            log::trace!("[Engine] ignoring play for stale gen={}", generation.0);
            return;
        }

        // A finished sink has nothing left to play; rebuild it from the start.
        if l.sink.empty() {
            match create_sink(&self.stream, &l.path, self.volume) {
                Ok((sink, _)) => {
                    if let Some(l) = self.loaded.as_mut() {
                        l.sink = sink;
                    }
                }
                Err(failure) => {
                    self.emit(generation, EngineEvent::PlayResolved(Err(failure)));
                    return;
                }
            }
        }

        if let Some(l) = self.loaded.as_ref() {
            l.sink.play();
        }
        self.playing = true;
        self.emit(generation, EngineEvent::PlayResolved(Ok(())));
        self.emit(generation, EngineEvent::Play);
    }

    fn pause(&mut self) {
        if let Some(l) = self.loaded.as_ref() {
            l.sink.pause();
            if self.playing {
                self.playing = false;
                self.emit(l.generation, EngineEvent::Pause);
            }
        }
    }

    fn seek(&mut self, seconds: f64) {
        let Some(l) = self.loaded.as_ref() else {
            return;
        };
        let target = Duration::from_secs_f64(seconds.max(0.0));
        if let Err(e) = l.sink.try_seek(target) {
            log::warn!("[Engine] seek to {seconds:.1}s failed: {e}");
            return;
        }
        self.emit(
            l.generation,
            EngineEvent::TimeUpdate {
                position: l.sink.get_pos().as_secs_f64(),
            },
        );
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(l) = self.loaded.as_ref() {
            l.sink.set_volume(volume);
        }
    }

    /// Periodic position report and end-of-track detection.
    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(l) = self.loaded.as_ref() else {
            return;
        };
        let generation = l.generation;
        if l.sink.empty() {
            self.playing = false;
            self.emit(generation, EngineEvent::Ended);
        } else {
            let position = l.sink.get_pos().as_secs_f64();
            self.emit(generation, EngineEvent::TimeUpdate { position });
        }
    }
}

/// Spawn the audio thread. `ready` receives `Ok` once the output device is
/// open, or the reason it could not be opened.
pub(super) fn spawn_audio_thread(
    rx: Receiver<EngineCmd>,
    ready: Sender<Result<(), String>>,
    poll: Duration,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("micfight-audio".to_string())
        .spawn(move || {
            let mut stream = match OutputStreamBuilder::open_default_stream() {
                Ok(s) => s,
                Err(e) => {
                    let _ = ready.send(Err(e.to_string()));
                    return;
                }
            };
            // rodio logs to stderr when the stream is dropped, which would land in the TUI.
            stream.log_on_drop(false);
            let _ = ready.send(Ok(()));

            let mut audio = AudioThread {
                stream,
                events: None,
                loaded: None,
                playing: false,
                volume: 1.0,
            };

            loop {
                match rx.recv_timeout(poll) {
                    Ok(cmd) => match cmd {
                        EngineCmd::Subscribe(tx) => audio.events = Some(tx),
                        EngineCmd::Load { generation, source } => audio.load(generation, &source),
                        EngineCmd::Play(generation) => audio.play(generation),
                        EngineCmd::Pause => audio.pause(),
                        EngineCmd::Seek(secs) => audio.seek(secs),
                        EngineCmd::Volume(v) => audio.set_volume(v),
                        EngineCmd::Unload => audio.stop_current(),
                        EngineCmd::Quit => {
                            audio.stop_current();
                            break;
                        }
                    },
                    Err(RecvTimeoutError::Timeout) => audio.tick(),
                    Err(RecvTimeoutError::Disconnected) => {
                        audio.stop_current();
                        break;
                    }
                }
            }
            log::debug!("[Engine] audio thread stopped");
        })
}
