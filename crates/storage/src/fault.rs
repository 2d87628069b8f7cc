//! Fault injection
//!
//! A [`Fault`] makes matching host operations fail with a fixed message until
//! the faults are cleared. Used by tests to drive the contract's error paths.

use student_ledger_core::StateError;

/// Host operation a fault applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOp {
    /// `get_state`
    Get,
    /// `put_state`
    Put,
    /// `del_state`
    Delete,
    /// `get_query_result` itself
    Query,
    /// Advancing a query iterator
    QueryNext,
}

/// An injected host failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Operation that fails
    pub op: FaultOp,
    /// Restrict to one key; `None` matches every key
    pub key: Option<String>,
    /// Message returned by the host
    pub message: String,
}

impl Fault {
    /// Fail every call of `op`
    pub fn new(op: FaultOp, message: impl Into<String>) -> Self {
        Self {
            op,
            key: None,
            message: message.into(),
        }
    }

    /// Fail calls of `op` on `key` only
    pub fn on_key(op: FaultOp, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            op,
            key: Some(key.into()),
            message: message.into(),
        }
    }

    /// Check if this fault applies to a call
    pub fn applies(&self, op: FaultOp, key: Option<&str>) -> bool {
        self.op == op
            && match (&self.key, key) {
                (None, _) => true,
                (Some(wanted), Some(actual)) => wanted == actual,
                (Some(_), None) => false,
            }
    }

    /// The host error this fault produces
    pub fn to_error(&self) -> StateError {
        StateError::new(self.message.clone())
    }
}
