//! Committed world state
//!
//! [`MemoryLedger`] holds the committed key/value state of the ledger and
//! hands out [`MemoryTransaction`] contexts. Transactions read committed
//! state directly and buffer their writes; [`MemoryTransaction::commit`]
//! applies the write set under the world-state write lock with a single new
//! commit version.
//!
//! ## Versions
//!
//! The global version starts at `LedgerOptions::initial_version` and is
//! incremented once per commit that writes at least one key. Every key in a
//! commit records that commit's version.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use student_ledger_core::{QueryRecord, Selector, StateError, StateResult};
use tracing::debug;

use crate::fault::{Fault, FaultOp};
use crate::transaction::{MemoryTransaction, WriteOp};

/// A stored value with the version of the commit that wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    /// Stored bytes
    pub value: Vec<u8>,
    /// Commit version that wrote the value
    pub version: u64,
}

/// Options for creating a ledger
///
/// # Example
///
/// ```
/// use student_ledger_storage::{LedgerOptions, MemoryLedger};
///
/// let ledger = MemoryLedger::with_options(
///     LedgerOptions::new().initial_version(10).tx_id_prefix("test"),
/// );
/// assert_eq!(ledger.current_version(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct LedgerOptions {
    initial_version: u64,
    tx_id_prefix: String,
}

impl LedgerOptions {
    /// Default options: version 0, transaction ids `tx-1`, `tx-2`, ...
    pub fn new() -> Self {
        Self {
            initial_version: 0,
            tx_id_prefix: "tx".to_string(),
        }
    }

    /// Starting global version
    pub fn initial_version(mut self, version: u64) -> Self {
        self.initial_version = version;
        self
    }

    /// Prefix for generated transaction ids
    pub fn tx_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tx_id_prefix = prefix.into();
        self
    }
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory ledger host
///
/// # Thread Safety
///
/// `MemoryLedger` is `Send + Sync`. Readers take the world-state read lock per
/// call; commits take the write lock once and apply their entire write set.
pub struct MemoryLedger {
    /// Committed world state, ordered by key
    state: RwLock<BTreeMap<String, VersionedValue>>,
    /// Global commit version
    version: AtomicU64,
    /// Next transaction number
    next_txn: AtomicU64,
    /// Injected host failures
    faults: Mutex<Vec<Fault>>,
    tx_id_prefix: String,
}

impl MemoryLedger {
    /// Create an empty ledger with default options
    pub fn new() -> Self {
        Self::with_options(LedgerOptions::default())
    }

    /// Create an empty ledger
    pub fn with_options(options: LedgerOptions) -> Self {
        Self {
            state: RwLock::new(BTreeMap::new()),
            version: AtomicU64::new(options.initial_version),
            next_txn: AtomicU64::new(1),
            faults: Mutex::new(Vec::new()),
            tx_id_prefix: options.tx_id_prefix,
        }
    }

    pub(crate) fn from_parts(version: u64, entries: BTreeMap<String, VersionedValue>) -> Self {
        let ledger = Self::with_options(LedgerOptions::new().initial_version(version));
        *ledger.state.write() = entries;
        ledger
    }

    /// Get current global version
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Check if world state is empty
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Committed value under `key`, bypassing transactions and faults
    pub fn committed(&self, key: &str) -> Option<VersionedValue> {
        self.state.read().get(key).cloned()
    }

    /// All committed entries in key order
    pub fn entries(&self) -> Vec<(String, VersionedValue)> {
        self.state
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Start a transaction
    pub fn begin(&self) -> MemoryTransaction<'_> {
        let n = self.next_txn.fetch_add(1, Ordering::SeqCst);
        MemoryTransaction::new(self, format!("{}-{}", self.tx_id_prefix, n))
    }

    /// Run `f` in a new transaction and commit it if `f` succeeds.
    ///
    /// On error the write set is discarded and the error is returned.
    pub fn submit<T, E>(
        &self,
        f: impl FnOnce(&MemoryTransaction<'_>) -> Result<T, E>,
    ) -> Result<T, E> {
        let txn = self.begin();
        let value = f(&txn)?;
        txn.commit();
        Ok(value)
    }

    /// Run `f` in a new transaction that is never committed
    pub fn evaluate<T, E>(
        &self,
        f: impl FnOnce(&MemoryTransaction<'_>) -> Result<T, E>,
    ) -> Result<T, E> {
        let txn = self.begin();
        f(&txn)
    }

    // ========================================================================
    // Fault injection
    // ========================================================================

    /// Make matching host operations fail until [`clear_faults`](Self::clear_faults)
    pub fn inject_fault(&self, fault: Fault) {
        self.faults.lock().push(fault);
    }

    /// Remove all injected faults
    pub fn clear_faults(&self) {
        self.faults.lock().clear();
    }

    pub(crate) fn check_fault(&self, op: FaultOp, key: Option<&str>) -> StateResult<()> {
        match self.faults.lock().iter().find(|f| f.applies(op, key)) {
            Some(fault) => Err(fault.to_error()),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Committed state access (used by transactions)
    // ========================================================================

    pub(crate) fn read(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        self.check_fault(FaultOp::Get, Some(key))?;
        Ok(self.state.read().get(key).map(|v| v.value.clone()))
    }

    /// Evaluate a selector query against committed state.
    ///
    /// Matching records are collected under the read lock so the result set
    /// reflects a single point in time.
    pub(crate) fn query(&self, query: &str) -> StateResult<Vec<StateResult<QueryRecord>>> {
        self.check_fault(FaultOp::Query, None)?;
        let selector = Selector::parse(query)
            .map_err(|e| StateError::new(format!("invalid query '{}': {}", query, e)))?;

        let state = self.state.read();
        let results: Vec<StateResult<QueryRecord>> = state
            .iter()
            .filter(|(_, v)| selector.matches(&v.value))
            .map(|(key, v)| -> StateResult<QueryRecord> {
                self.check_fault(FaultOp::QueryNext, Some(key))?;
                Ok(QueryRecord::new(key.clone(), v.value.clone()))
            })
            .collect();
        Ok(results)
    }

    /// Apply a write set atomically. Returns the commit version.
    pub(crate) fn apply(&self, tx_id: &str, writes: BTreeMap<String, WriteOp>) -> u64 {
        if writes.is_empty() {
            debug!(tx_id, "commit with empty write set");
            return self.current_version();
        }

        let mut state = self.state.write();
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        let count = writes.len();
        for (key, op) in writes {
            match op {
                WriteOp::Put(value) => {
                    state.insert(key, VersionedValue { value, version });
                }
                WriteOp::Delete => {
                    state.remove(&key);
                }
            }
        }
        debug!(tx_id, version, writes = count, "transaction committed");
        version
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}
