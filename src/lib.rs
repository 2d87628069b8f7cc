//! # Student Ledger
//!
//! Student registry chaincode with an in-memory reference host.
//!
//! The contract keeps student records (id, name, surname, age, program) in
//! ledger world state. It reaches that state only through the host
//! capability traits, so the same contract runs against a peer shim or
//! against [`MemoryLedger`] in tests.
//!
//! ## Quick Start
//!
//! ```
//! use student_ledger::prelude::*;
//!
//! let ledger = MemoryLedger::new();
//! let contract = StudentContract::new();
//!
//! // Seed and add a record in one committed transaction
//! ledger.submit(|ctx| {
//!     contract.init_ledger(ctx)?;
//!     contract.create_student(ctx, "3", "Luis", "Gómez", 23, "Derecho")
//! })?;
//!
//! // Read it back in a query
//! let luis = ledger.evaluate(|ctx| contract.read_student(ctx, "3"))?;
//! assert_eq!(luis.program, "Derecho");
//!
//! let all = ledger.evaluate(|ctx| contract.get_all_students(ctx))?;
//! assert_eq!(all.len(), 3);
//! # Ok::<(), student_ledger::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `student-ledger-core` - `Student`, errors, host traits, selector queries
//! - `student-ledger-storage` - `MemoryLedger`, transactions, snapshots
//! - `student-ledger-contract` - `StudentContract` and the invocation router

#![warn(missing_docs)]

pub mod prelude;

pub use student_ledger_contract::{
    ContractMetadata, FunctionKind, FunctionMetadata, Invocation, Response, StudentContract,
};
pub use student_ledger_core::{
    ChaincodeStub, Error, QueryIterator, QueryRecord, Result, Selector, StateError, StateResult,
    Student, TransactionContext, WireError,
};
pub use student_ledger_storage::{
    Fault, FaultOp, LedgerOptions, MemoryLedger, MemoryTransaction, SnapshotError,
    VersionedValue, WorldStateSnapshot,
};
