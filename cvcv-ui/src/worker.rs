use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use cvcv_core::{NameConfig, NameGenError};

/// Result delivered by a background generation.
pub type Generated = Result<Vec<String>, NameGenError>;

/// A generation running on its own thread.
///
/// The worker owns its copy of the configuration and never touches UI state;
/// the single result (or error) is handed back through a channel and picked
/// up by `poll` on the UI thread.
pub struct GenerationTask {
    rx: Receiver<Generated>,
}

impl GenerationTask {
    /// Starts generating on a new thread.
    ///
    /// `notify` runs on the worker right after the result is sent, typically
    /// to wake the UI (`Context::request_repaint`).
    pub fn spawn<F>(config: NameConfig, notify: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = config
                .build_engine()
                .and_then(|engine| Ok(engine.run()?.collect::<Vec<_>>()));
            // The receiver is gone if the window closed meanwhile.
            let _ = tx.send(result);
            notify();
        });
        Self { rx }
    }

    /// Returns the result once it is available.
    ///
    /// A worker that died without sending is reported as `Some(Err(..))`
    /// so the UI never waits forever.
    pub fn poll(&self) -> Option<Generated> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(NameGenError::InvalidConfiguration(
                "generation worker stopped without a result".to_owned(),
            ))),
        }
    }
}
