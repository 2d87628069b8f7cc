//! Wire error representation
//!
//! Failed invocations carry a JSON payload of the form:
//! ```json
//! {
//!   "code": "NotFound",
//!   "message": "student 9 does not exist",
//!   "details": {"id": "9"}
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire error representation for JSON encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    /// The canonical error code (e.g., "NotFound", "StateAccess")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl WireError {
    /// Create a new wire error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a wire error with details
    pub fn with_details(code: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Encode as compact JSON bytes
    pub fn to_json_bytes(&self) -> Vec<u8> {
        // Serializing a struct of strings and a Value cannot fail
        serde_json::to_vec(self).unwrap_or_default()
    }
}
