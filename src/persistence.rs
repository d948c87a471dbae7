use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::DrawingState;
use crate::util::time;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur during snapshot persistence operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A serializable snapshot of a drawing project.
///
/// In-flight buffers and playback bookkeeping are transient and not part of
/// the format; loading yields a state at rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub version: u32,
    /// Seconds since the UNIX epoch at the time the snapshot was taken.
    pub timestamp: u64,
    pub state: DrawingState,
}

impl ProjectSnapshot {
    /// Captures the current state under the current format version.
    pub fn new(state: &DrawingState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            timestamp: time::timestamp_secs(),
            state: state.clone(),
        }
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("saved project snapshot to {}", path.as_ref().display());
        Ok(())
    }

    /// Reads a snapshot back, rejecting versions newer than this build
    /// understands.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let raw = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&raw)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}
