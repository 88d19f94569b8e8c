use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;

use super::engine::MediaEngine;
use super::error::EngineError;
use super::thread::{EngineCmd, spawn_audio_thread};
use super::types::{EngineMessage, Generation};

/// Media engine that plays local files through the default output device.
///
/// The output stream lives on a dedicated audio thread; this handle only
/// forwards commands to it.
pub struct RodioEngine {
    tx: Sender<EngineCmd>,
    join: Option<JoinHandle<()>>,
}

impl RodioEngine {
    pub fn open(settings: &AudioSettings) -> Result<Self, EngineError> {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();
        let poll = Duration::from_millis(settings.poll_ms.max(10));

        let join = spawn_audio_thread(rx, ready_tx, poll)?;
        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(reason)) => {
                let _ = join.join();
                return Err(EngineError::NoOutputDevice(reason));
            }
            Err(_) => {
                let _ = join.join();
                return Err(EngineError::NoOutputDevice(
                    "audio thread exited during startup".to_string(),
                ));
            }
        }

        log::info!("[Engine] audio output ready");
        Ok(Self {
            tx,
            join: Some(join),
        })
    }

    fn send(&self, cmd: EngineCmd) {
        if let Err(e) = self.tx.send(cmd) {
            log::error!("[Engine] audio thread is gone, dropped {:?}", e.0);
        }
    }
}

impl MediaEngine for RodioEngine {
    fn subscribe(&mut self, events: Sender<EngineMessage>) {
        self.send(EngineCmd::Subscribe(events));
    }

    fn load(&mut self, generation: Generation, source: &str) {
        self.send(EngineCmd::Load {
            generation,
            source: source.to_string(),
        });
    }

    fn request_play(&mut self, generation: Generation) {
        self.send(EngineCmd::Play(generation));
    }

    fn pause(&mut self) {
        self.send(EngineCmd::Pause);
    }

    fn set_position(&mut self, seconds: f64) {
        self.send(EngineCmd::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(EngineCmd::Volume(volume));
    }

    fn unload(&mut self) {
        self.send(EngineCmd::Unload);
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        let _ = self.tx.send(EngineCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}
