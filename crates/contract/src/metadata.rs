//! Contract metadata
//!
//! Describes the contract's functions for hosts and clients. The same table
//! drives argument checking in the router.

use serde::Serialize;

use crate::contract::StudentContract;

/// Whether a function's writes are meant to be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    /// Writes world state; run as a submitted transaction
    Submit,
    /// Reads only; run as an evaluated query
    Evaluate,
}

/// One transaction function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionMetadata {
    /// Function name as sent by clients
    pub name: &'static str,
    /// Submit or evaluate
    pub kind: FunctionKind,
    /// Parameter names, in argument order
    pub parameters: &'static [&'static str],
}

const STUDENT_FIELDS: &[&str] = &["id", "name", "surname", "age", "program"];

/// Every function the contract exposes
pub const FUNCTIONS: &[FunctionMetadata] = &[
    FunctionMetadata {
        name: "InitLedger",
        kind: FunctionKind::Submit,
        parameters: &[],
    },
    FunctionMetadata {
        name: "CreateStudent",
        kind: FunctionKind::Submit,
        parameters: STUDENT_FIELDS,
    },
    FunctionMetadata {
        name: "ReadStudent",
        kind: FunctionKind::Evaluate,
        parameters: &["id"],
    },
    FunctionMetadata {
        name: "UpdateStudent",
        kind: FunctionKind::Submit,
        parameters: STUDENT_FIELDS,
    },
    FunctionMetadata {
        name: "DeleteStudent",
        kind: FunctionKind::Submit,
        parameters: &["id"],
    },
    FunctionMetadata {
        name: "GetAllStudents",
        kind: FunctionKind::Evaluate,
        parameters: &[],
    },
    FunctionMetadata {
        name: "GetMetadata",
        kind: FunctionKind::Evaluate,
        parameters: &[],
    },
];

impl FunctionMetadata {
    /// Find a function by its unqualified name
    pub fn lookup(name: &str) -> Option<&'static FunctionMetadata> {
        FUNCTIONS.iter().find(|f| f.name == name)
    }
}

/// Description of the whole contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractMetadata {
    /// Contract name
    pub name: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Exposed functions
    pub functions: &'static [FunctionMetadata],
}

impl StudentContract {
    /// Describe the contract
    pub fn metadata(&self) -> ContractMetadata {
        ContractMetadata {
            name: Self::NAME,
            version: env!("CARGO_PKG_VERSION"),
            functions: FUNCTIONS,
        }
    }
}
