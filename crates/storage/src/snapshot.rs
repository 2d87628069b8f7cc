//! World state snapshots
//!
//! A [`WorldStateSnapshot`] captures committed state and the global version
//! so a ledger can be persisted between processes. Values are arbitrary
//! bytes and are stored base64-encoded:
//!
//! ```json
//! {
//!   "version": 3,
//!   "entries": {
//!     "1": {"version": 1, "value": "eyJpZCI6IjEiLC4uLn0="}
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::ledger::{MemoryLedger, VersionedValue};

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot file is not valid JSON
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry value is not valid base64
    #[error("invalid value for key '{key}': {reason}")]
    Encoding {
        /// Key of the bad entry
        key: String,
        /// Decoder message
        reason: String,
    },
}

/// One persisted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Commit version that wrote the value
    pub version: u64,
    /// Base64-encoded value
    pub value: String,
}

/// Serializable copy of committed world state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldStateSnapshot {
    /// Global version at snapshot time
    pub version: u64,
    /// Entries by key
    pub entries: BTreeMap<String, SnapshotEntry>,
}

impl MemoryLedger {
    /// Capture committed state
    pub fn snapshot(&self) -> WorldStateSnapshot {
        let entries = self
            .entries()
            .into_iter()
            .map(|(key, v)| {
                let entry = SnapshotEntry {
                    version: v.version,
                    value: STANDARD.encode(&v.value),
                };
                (key, entry)
            })
            .collect();
        WorldStateSnapshot {
            version: self.current_version(),
            entries,
        }
    }

    /// Rebuild a ledger from a snapshot
    pub fn from_snapshot(snapshot: WorldStateSnapshot) -> Result<Self, SnapshotError> {
        let mut entries = BTreeMap::new();
        for (key, entry) in snapshot.entries {
            let value = STANDARD
                .decode(entry.value.as_bytes())
                .map_err(|e| SnapshotError::Encoding {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
            entries.insert(
                key,
                VersionedValue {
                    value,
                    version: entry.version,
                },
            );
        }
        Ok(MemoryLedger::from_parts(snapshot.version, entries))
    }

    /// Write a snapshot of committed state to `path` as JSON.
    ///
    /// The file is written next to `path` and renamed over it, so a reader
    /// sees either the old snapshot or the new one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let snapshot = self.snapshot();
        let json = serde_json::to_vec_pretty(&snapshot)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        info!(
            "Saved {} entries at version {} to {}",
            snapshot.entries.len(),
            snapshot.version,
            path.display()
        );
        Ok(())
    }

    /// Load a ledger from a snapshot file.
    ///
    /// A missing file yields an empty ledger.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", path.display());
                return Ok(MemoryLedger::new());
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot: WorldStateSnapshot = serde_json::from_slice(&bytes)?;
        info!(
            "Loaded {} entries at version {} from {}",
            snapshot.entries.len(),
            snapshot.version,
            path.display()
        );
        MemoryLedger::from_snapshot(snapshot)
    }
}
