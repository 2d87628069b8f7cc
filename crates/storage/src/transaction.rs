//! Transaction context for the in-memory ledger
//!
//! A [`MemoryTransaction`] is what the contract sees during one invocation.
//!
//! ## Read semantics
//!
//! Reads always observe committed state. A write made earlier in the same
//! transaction is not visible to `get_state` or `get_query_result` until
//! the transaction commits, matching peer world-state semantics.
//!
//! ## Write set
//!
//! `put_state` and `del_state` are buffered. The last operation on a key
//! wins. Nothing reaches world state before [`MemoryTransaction::commit`];
//! dropping the transaction discards the write set.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use student_ledger_core::{
    ChaincodeStub, QueryIterator, StateError, StateResult, TransactionContext,
};

use crate::fault::FaultOp;
use crate::ledger::MemoryLedger;

/// Buffered write
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WriteOp {
    Put(Vec<u8>),
    Delete,
}

/// A transaction against a [`MemoryLedger`]
pub struct MemoryTransaction<'a> {
    ledger: &'a MemoryLedger,
    tx_id: String,
    writes: Mutex<BTreeMap<String, WriteOp>>,
}

impl<'a> MemoryTransaction<'a> {
    pub(crate) fn new(ledger: &'a MemoryLedger, tx_id: String) -> Self {
        Self {
            ledger,
            tx_id,
            writes: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of keys in the write set
    pub fn pending_writes(&self) -> usize {
        self.writes.lock().len()
    }

    /// Apply the write set to world state. Returns the commit version.
    pub fn commit(self) -> u64 {
        let writes = self.writes.into_inner();
        self.ledger.apply(&self.tx_id, writes)
    }

    fn validate_key(key: &str) -> StateResult<()> {
        if key.is_empty() {
            return Err(StateError::new("key must not be an empty string"));
        }
        Ok(())
    }
}

impl ChaincodeStub for MemoryTransaction<'_> {
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        Self::validate_key(key)?;
        self.ledger.read(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()> {
        Self::validate_key(key)?;
        self.ledger.check_fault(FaultOp::Put, Some(key))?;
        self.writes
            .lock()
            .insert(key.to_string(), WriteOp::Put(value.to_vec()));
        Ok(())
    }

    fn del_state(&self, key: &str) -> StateResult<()> {
        Self::validate_key(key)?;
        self.ledger.check_fault(FaultOp::Delete, Some(key))?;
        self.writes.lock().insert(key.to_string(), WriteOp::Delete);
        Ok(())
    }

    fn get_query_result(&self, query: &str) -> StateResult<QueryIterator<'_>> {
        let results = self.ledger.query(query)?;
        Ok(Box::new(results.into_iter()))
    }
}

impl TransactionContext for MemoryTransaction<'_> {
    fn stub(&self) -> &dyn ChaincodeStub {
        self
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}
