//! In-memory ledger host
//!
//! This crate implements a reference host for the student contract with:
//! - MemoryLedger: committed world state behind a RwLock, global commit version
//! - MemoryTransaction: per-invocation context with a buffered write set
//! - Selector queries over committed state
//! - Fault injection for exercising host error paths
//! - JSON snapshots for persisting world state between processes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fault;
pub mod ledger;
pub mod snapshot;
pub mod transaction;

pub use fault::{Fault, FaultOp};
pub use ledger::{LedgerOptions, MemoryLedger, VersionedValue};
pub use snapshot::{SnapshotError, WorldStateSnapshot};
pub use transaction::MemoryTransaction;
