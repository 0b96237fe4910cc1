//! Background loading of the two inputs
//!
//! Both files are read off the UI thread; the app polls each frame and only
//! builds the map once both have arrived. The first failure wins.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::data::{self, Observation, Region};
use crate::error::{AtlasError, Result};

/// Messages sent back by the loader threads
enum LoadMessage {
    Observations(Result<Vec<Observation>>),
    Regions(Result<Vec<Region>>),
}

/// Both inputs, once loaded
pub struct LoadedInputs {
    pub observations: Vec<Observation>,
    pub regions: Vec<Region>,
}

/// Loads the dataset and the boundaries in parallel
pub struct BackgroundLoader {
    rx: Receiver<LoadMessage>,
    handles: Vec<JoinHandle<()>>,
    observations: Option<Vec<Observation>>,
    regions: Option<Vec<Region>>,
    finished: bool,
}

impl BackgroundLoader {
    /// Spawn one thread per input
    pub fn spawn(data_path: PathBuf, boundaries_path: PathBuf) -> Self {
        let (tx, rx) = channel::<LoadMessage>();

        let data_tx: Sender<LoadMessage> = tx.clone();
        let data_handle = thread::spawn(move || {
            log::info!("loading dataset from {}", data_path.display());
            let result = data::load_observations(&data_path);
            let _ = data_tx.send(LoadMessage::Observations(result));
        });

        let regions_handle = thread::spawn(move || {
            log::info!("loading boundaries from {}", boundaries_path.display());
            let result = data::load_regions(&boundaries_path);
            let _ = tx.send(LoadMessage::Regions(result));
        });

        Self {
            rx,
            handles: vec![data_handle, regions_handle],
            observations: None,
            regions: None,
            finished: false,
        }
    }

    /// Poll for completion (non-blocking)
    ///
    /// Returns `Some` exactly once: with both inputs, or with the first error.
    pub fn poll(&mut self) -> Option<Result<LoadedInputs>> {
        if self.finished {
            return None;
        }

        loop {
            match self.rx.try_recv() {
                Ok(LoadMessage::Observations(Ok(observations))) => {
                    self.observations = Some(observations);
                }
                Ok(LoadMessage::Regions(Ok(regions))) => {
                    self.regions = Some(regions);
                }
                Ok(LoadMessage::Observations(Err(e))) | Ok(LoadMessage::Regions(Err(e))) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.observations.is_none() || self.regions.is_none() {
                        self.finished = true;
                        return Some(Err(AtlasError::Ui(
                            "loader thread exited without a result".to_string(),
                        )));
                    }
                    break;
                }
            }
        }

        if self.observations.is_some() && self.regions.is_some() {
            self.finished = true;
            let observations = self.observations.take()?;
            let regions = self.regions.take()?;
            return Some(Ok(LoadedInputs {
                observations,
                regions,
            }));
        }
        None
    }
}

impl Drop for BackgroundLoader {
    fn drop(&mut self) {
        // a thread still reading after the other failed is left to finish on its own
        for handle in self.handles.drain(..) {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}
