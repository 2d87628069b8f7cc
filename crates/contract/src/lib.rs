//! Student registry contract
//!
//! [`StudentContract`] implements the six transaction entry points over a
//! host-supplied [`TransactionContext`](student_ledger_core::TransactionContext).
//! [`StudentContract::invoke`] routes Fabric-style invocations (function name
//! plus string arguments) onto them and wraps the outcome in a [`Response`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod contract;
pub mod metadata;
pub mod router;

pub use contract::StudentContract;
pub use metadata::{ContractMetadata, FunctionKind, FunctionMetadata};
pub use router::{Invocation, Response};
