//! Save/load of flight snapshots
//!
//! A snapshot is a versioned JSON envelope around a [`FlightState`]. The
//! state carries its own tick counter, so a reloaded snapshot steps exactly
//! like the run it was taken from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::FlightState;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Serialize a state into a snapshot envelope
pub fn to_json(state: &FlightState) -> Result<String> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        state,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a snapshot envelope
pub fn from_json(json: &str) -> Result<FlightState> {
    let envelope: Envelope<FlightState> = serde_json::from_str(json)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(Error::UnsupportedVersion {
            found: envelope.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(envelope.state)
}

/// Write a snapshot to disk (tmp file, then rename)
pub fn save_to_path(state: &FlightState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(state)?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    log::info!("Snapshot saved to {} (tick {})", path.display(), state.tick);
    Ok(())
}

/// Read a snapshot from disk
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FlightState> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let state = from_json(&json)?;
    log::info!("Snapshot loaded from {} (tick {})", path.display(), state.tick);
    Ok(state)
}
