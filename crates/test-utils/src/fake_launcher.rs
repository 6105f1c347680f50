use std::sync::{Arc, Mutex};

use fdb_harness::errors::Result;
use fdb_harness::exec::Launcher;

/// A launcher that never spawns anything.
///
/// It records every argv it is handed and returns a sequence number
/// (1, 2, 3, ...) as the "handle".
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every argv launched so far, in launch order.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.launched.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    type Handle = usize;

    fn launch(&self, argv: Vec<String>) -> Result<usize> {
        let mut guard = self.launched.lock().unwrap();
        guard.push(argv);
        Ok(guard.len())
    }
}
