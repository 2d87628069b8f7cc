//! Error types for the student ledger.
//!
//! Two layers:
//! - [`StateError`]: an error raised by the host while accessing world state.
//!   The contract never inspects it, it only carries it to the caller.
//! - [`Error`]: everything a contract operation or the router can return.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | StateAccess | Host read, write, delete or query failed |
//! | NotFound | Student key absent on read |
//! | Initialization | A seed write failed during ledger initialization |
//! | Serialization | Stored bytes are not a valid student record |
//! | InvalidArgument | Invocation argument count or format is wrong |
//! | UnknownFunction | Invocation names a function the contract lacks |

use serde_json::json;
use thiserror::Error;

use crate::wire::WireError;

/// Host-side world state failure.
///
/// The message is produced by the host and is surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StateError {
    message: String,
}

impl StateError {
    /// Create a state error with the host's message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The host's message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for host state operations.
pub type StateResult<T> = std::result::Result<T, StateError>;

/// All student ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Host state access failed
    #[error(transparent)]
    StateAccess(#[from] StateError),

    /// No student stored under the key
    #[error("student {id} does not exist")]
    NotFound {
        /// The missing key
        id: String,
    },

    /// Ledger initialization aborted on a failed seed write
    #[error("failed to initialize ledger: {0}")]
    Initialization(#[source] StateError),

    /// Stored value is not a student record
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invocation argument is missing, extra or malformed
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Invocation names an unknown function
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

/// Result type for student ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::StateAccess(_) => "StateAccess",
            Error::NotFound { .. } => "NotFound",
            Error::Initialization(_) => "Initialization",
            Error::Serialization(_) => "Serialization",
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::UnknownFunction(_) => "UnknownFunction",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if the host's state access failed, including during initialization.
    pub fn is_state_access(&self) -> bool {
        matches!(self, Error::StateAccess(_) | Error::Initialization(_))
    }

    /// Convert to wire error format
    pub fn to_wire_error(&self) -> WireError {
        let details = match self {
            Error::StateAccess(e) | Error::Initialization(e) => Some(json!({ "host": e.message() })),
            Error::NotFound { id } => Some(json!({ "id": id })),
            Error::Serialization(_) => None,
            Error::InvalidArgument { name, reason } => {
                Some(json!({ "argument": name, "reason": reason }))
            }
            Error::UnknownFunction(function) => Some(json!({ "function": function })),
        };

        WireError {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}
