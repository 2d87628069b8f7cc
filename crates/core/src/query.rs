//! Rich query types
//!
//! Queries use the CouchDB selector syntax understood by ledger hosts:
//!
//! ```json
//! {"selector": {"program": "Medicina", "age": {"$eq": 22}}}
//! ```
//!
//! The empty selector `{"selector":{}}` matches every record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Rejected query text
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Not a JSON object with a `selector` field
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Operator other than `$eq`
    #[error("unsupported operator '{operator}' on field '{field}'")]
    UnsupportedOperator {
        /// Field the operator was applied to
        field: String,
        /// The operator
        operator: String,
    },
}

/// One key/value pair yielded by a rich query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// World-state key
    pub key: String,
    /// Stored bytes
    pub value: Vec<u8>,
}

impl QueryRecord {
    /// Create a query record
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A selector query.
///
/// Only top-level field equality is supported, either as a bare value or as
/// `{"$eq": value}`. [`Selector::parse`] rejects every other operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    /// Field name to required value
    pub selector: Map<String, Value>,
}

impl Selector {
    /// The selector that matches every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a field equality condition
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.selector.insert(field.into(), value.into());
        self
    }

    /// Parse query text
    pub fn parse(query: &str) -> Result<Self, SelectorError> {
        let selector: Selector = serde_json::from_str(query)?;
        selector.check_operators()?;
        Ok(selector)
    }

    fn check_operators(&self) -> Result<(), SelectorError> {
        for (field, condition) in &self.selector {
            if field.starts_with('$') {
                return Err(SelectorError::UnsupportedOperator {
                    field: field.clone(),
                    operator: field.clone(),
                });
            }
            let Value::Object(op) = condition else {
                continue;
            };
            if let Some(operator) = op.keys().find(|k| k.starts_with('$') && *k != "$eq") {
                return Err(SelectorError::UnsupportedOperator {
                    field: field.clone(),
                    operator: operator.clone(),
                });
            }
        }
        Ok(())
    }

    /// Encode as query text
    pub fn to_query_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"selector":{}}"#.to_string())
    }

    /// Check if this selector matches every record
    pub fn is_match_all(&self) -> bool {
        self.selector.is_empty()
    }

    /// Check a stored value against the selector.
    ///
    /// Values that are not JSON objects only match the empty selector.
    pub fn matches(&self, value: &[u8]) -> bool {
        if self.is_match_all() {
            return true;
        }
        let document: Value = match serde_json::from_slice(value) {
            Ok(v) => v,
            Err(_) => return false,
        };
        let Some(fields) = document.as_object() else {
            return false;
        };
        self.selector.iter().all(|(field, condition)| {
            let expected = match condition {
                Value::Object(op) if op.len() == 1 && op.contains_key("$eq") => &op["$eq"],
                other => other,
            };
            fields.get(field) == Some(expected)
        })
    }
}
