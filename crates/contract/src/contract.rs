//! Contract operations.
//!
//! Every operation is a direct pass-through to the transaction's stub:
//!
//! | Operation | Stub calls |
//! |-----------|------------|
//! | init_ledger | put_state x2 |
//! | create_student | put_state |
//! | read_student | get_state |
//! | update_student | put_state |
//! | delete_student | del_state |
//! | get_all_students | get_query_result |
//!
//! Host errors are returned unchanged. Create and update overwrite without
//! reading first; delete does not check that the key exists.

use student_ledger_core::{Error, Result, Selector, Student, TransactionContext};
use tracing::debug;

/// The student registry contract
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentContract;

impl StudentContract {
    /// Contract name used to namespace function names (`students:ReadStudent`)
    pub const NAME: &'static str = "students";

    /// Create the contract
    pub fn new() -> Self {
        Self
    }

    /// Seed the ledger with the two fixed records.
    ///
    /// Writes unconditionally, in order. The first failed write aborts
    /// initialization with [`Error::Initialization`].
    pub fn init_ledger(&self, ctx: &dyn TransactionContext) -> Result<()> {
        for student in Student::seed_records() {
            let bytes = student.to_bytes()?;
            ctx.stub()
                .put_state(&student.id, &bytes)
                .map_err(Error::Initialization)?;
        }
        debug!(tx_id = ctx.tx_id(), "ledger initialized");
        Ok(())
    }

    /// Write a student under `id`, replacing any existing record.
    pub fn create_student(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
        name: &str,
        surname: &str,
        age: i64,
        program: &str,
    ) -> Result<()> {
        self.put_student(ctx, &Student::new(id, name, surname, age, program))
    }

    /// Read the student stored under `id`.
    pub fn read_student(&self, ctx: &dyn TransactionContext, id: &str) -> Result<Student> {
        match ctx.stub().get_state(id)? {
            Some(bytes) => Student::from_bytes(&bytes),
            None => Err(Error::NotFound { id: id.to_string() }),
        }
    }

    /// Overwrite every field of the student under `id`.
    ///
    /// Same write as [`create_student`](Self::create_student); an absent key
    /// is created.
    pub fn update_student(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
        name: &str,
        surname: &str,
        age: i64,
        program: &str,
    ) -> Result<()> {
        self.put_student(ctx, &Student::new(id, name, surname, age, program))
    }

    /// Remove the student under `id`.
    pub fn delete_student(&self, ctx: &dyn TransactionContext, id: &str) -> Result<()> {
        ctx.stub().del_state(id)?;
        Ok(())
    }

    /// Every student in world state, in query engine order.
    pub fn get_all_students(&self, ctx: &dyn TransactionContext) -> Result<Vec<Student>> {
        let query = Selector::all().to_query_string();
        let results = ctx.stub().get_query_result(&query)?;

        let mut students = Vec::new();
        for record in results {
            let record = record?;
            students.push(Student::from_bytes(&record.value)?);
        }
        Ok(students)
    }

    /// Write a prepared record under its own id
    pub fn put_student(&self, ctx: &dyn TransactionContext, student: &Student) -> Result<()> {
        let bytes = student.to_bytes()?;
        ctx.stub().put_state(&student.id, &bytes)?;
        Ok(())
    }
}
