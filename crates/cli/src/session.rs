//! Session state: the loaded world state and where it is persisted.

use std::path::{Path, PathBuf};

use student_ledger_contract::{Invocation, Response, StudentContract};
use student_ledger_storage::MemoryLedger;
use tracing::info;

use crate::parse::CliAction;

/// World state for the lifetime of one CLI process
pub struct SessionState {
    ledger: MemoryLedger,
    path: PathBuf,
    contract: StudentContract,
}

impl SessionState {
    /// Load world state from `path`; a missing file starts empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref().to_path_buf();
        let ledger = MemoryLedger::load(&path)
            .map_err(|e| format!("Failed to open state {}: {}", path.display(), e))?;
        Ok(Self {
            ledger,
            path,
            contract: StudentContract::new(),
        })
    }

    /// Run an action.
    ///
    /// Successful invokes are committed and the snapshot is rewritten. An
    /// `Err` means the snapshot could not be written; contract failures come
    /// back as non-OK responses.
    pub fn execute(&mut self, action: CliAction) -> Result<Response, String> {
        match action {
            CliAction::Invoke(invocation) => self.submit(&invocation),
            CliAction::Query(invocation) => Ok(self.evaluate(&invocation)),
            CliAction::Metadata => Ok(self.evaluate(&Invocation::new(
                "GetMetadata",
                Vec::<String>::new(),
            ))),
        }
    }

    fn submit(&mut self, invocation: &Invocation) -> Result<Response, String> {
        let txn = self.ledger.begin();
        let response = self.contract.invoke(&txn, invocation);
        if !response.is_ok() {
            return Ok(response);
        }

        let before = self.ledger.snapshot();
        let version = txn.commit();
        if let Err(e) = self.ledger.save(&self.path) {
            self.ledger = MemoryLedger::from_snapshot(before)
                .map_err(|e| format!("Failed to roll back state: {}", e))?;
            return Err(format!("Failed to save state {}: {}", self.path.display(), e));
        }
        info!(function = %invocation.function, version, "committed");
        Ok(response)
    }

    fn evaluate(&self, invocation: &Invocation) -> Response {
        let txn = self.ledger.begin();
        self.contract.invoke(&txn, invocation)
    }

    /// The loaded world state
    #[cfg(test)]
    pub fn ledger(&self) -> &MemoryLedger {
        &self.ledger
    }
}
