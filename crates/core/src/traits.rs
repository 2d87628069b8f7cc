//! Host capability traits
//!
//! The contract never binds to a concrete ledger. It receives a
//! [`TransactionContext`] per invocation and reaches world state through the
//! [`ChaincodeStub`] it hands out. Any host (a peer shim, the in-memory
//! ledger, a test double) plugs in by implementing these two traits.

use crate::error::StateResult;
use crate::query::QueryRecord;

/// Iterator over rich query results.
///
/// Dropping the iterator releases the host's result set.
pub type QueryIterator<'a> = Box<dyn Iterator<Item = StateResult<QueryRecord>> + 'a>;

/// World state access granted to a single transaction.
///
/// Methods take `&self`: hosts buffer writes behind interior mutability
/// and apply them when the transaction commits.
pub trait ChaincodeStub {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any existing value.
    fn put_state(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn del_state(&self, key: &str) -> StateResult<()>;

    /// Run a selector query and iterate the matching records.
    ///
    /// Result order is whatever the host's query engine produces.
    fn get_query_result(&self, query: &str) -> StateResult<QueryIterator<'_>>;
}

/// Per-invocation handle supplied by the host.
pub trait TransactionContext {
    /// World state access for this transaction
    fn stub(&self) -> &dyn ChaincodeStub;

    /// Host-assigned transaction identifier
    fn tx_id(&self) -> &str;
}
