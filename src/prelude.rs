//! Convenient imports
//!
//! ```
//! use student_ledger::prelude::*;
//! ```

pub use crate::{
    ChaincodeStub, Error, Invocation, MemoryLedger, Response, Result, Student, StudentContract,
    TransactionContext,
};
