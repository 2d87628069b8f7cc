//! Core types for the student ledger chaincode
//!
//! This crate defines the pieces shared by every layer:
//! - Student: the single record type kept in world state
//! - Error / StateError: contract and host error types
//! - ChaincodeStub / TransactionContext: the host capability traits
//! - Selector / QueryRecord: rich query request and result types
//! - WireError: JSON error payload carried in failed responses

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
pub mod student;
pub mod traits;
pub mod wire;

pub use error::{Error, Result, StateError, StateResult};
pub use query::{QueryRecord, Selector, SelectorError};
pub use student::Student;
pub use traits::{ChaincodeStub, QueryIterator, TransactionContext};
pub use wire::WireError;
