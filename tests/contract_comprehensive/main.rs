//! Contract Comprehensive Test Suite
//!
//! Exercises `StudentContract` end to end against `MemoryLedger`, one
//! transaction per operation, the way a peer would run it.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test contract_comprehensive
//!
//! # Run host error tests only
//! cargo test --test contract_comprehensive host_errors::
//! ```

use student_ledger::prelude::*;
use student_ledger::{Fault, FaultOp};

// Test modules
pub mod bootstrap;
pub mod crud;
pub mod host_errors;
pub mod invariants;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A fresh ledger and the contract under test
pub fn setup() -> (MemoryLedger, StudentContract) {
    (MemoryLedger::new(), StudentContract::new())
}

/// A ledger that has already run InitLedger
pub fn seeded() -> (MemoryLedger, StudentContract) {
    let (ledger, contract) = setup();
    ledger
        .submit(|ctx| contract.init_ledger(ctx))
        .expect("InitLedger failed");
    (ledger, contract)
}

/// Create a student in its own committed transaction
pub fn create(ledger: &MemoryLedger, contract: &StudentContract, student: &Student) -> Result<()> {
    ledger.submit(|ctx| {
        contract.create_student(
            ctx,
            &student.id,
            &student.name,
            &student.surname,
            student.age,
            &student.program,
        )
    })
}

/// Read a student in an uncommitted transaction
pub fn read(ledger: &MemoryLedger, contract: &StudentContract, id: &str) -> Result<Student> {
    ledger.evaluate(|ctx| contract.read_student(ctx, id))
}

/// List every student in an uncommitted transaction
pub fn list(ledger: &MemoryLedger, contract: &StudentContract) -> Result<Vec<Student>> {
    ledger.evaluate(|ctx| contract.get_all_students(ctx))
}

/// A handful of distinct records
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new("3", "Luis", "Gómez", 23, "Derecho"),
        Student::new("4", "María", "López", 19, "Arquitectura"),
        Student::new("A-100", "Chen", "Wei", 27, "Computer Science"),
        Student::new("empty-fields", "", "", 0, ""),
    ]
}
