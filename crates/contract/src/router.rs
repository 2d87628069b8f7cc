//! Invocation routing
//!
//! Hosts deliver a function name and string arguments. The router resolves
//! the function, checks the argument count against [`FUNCTIONS`], parses
//! typed arguments and calls the matching contract operation.
//!
//! Function names may be qualified with the contract name
//! (`students:ReadStudent`).
//!
//! ## Responses
//!
//! | Outcome | status | payload |
//! |---------|--------|---------|
//! | success | 200 | operation result as JSON, empty for writes |
//! | failure | 500 | [`WireError`](student_ledger_core::WireError) JSON |

use serde::de::DeserializeOwned;
use serde::Serialize;
use student_ledger_core::{Error, Result, TransactionContext};
use tracing::{debug, warn};

use crate::contract::StudentContract;
use crate::metadata::{FunctionMetadata, FUNCTIONS};

/// A function call delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Function name, optionally `contract:function`
    pub function: String,
    /// String arguments in parameter order
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from the raw argument list where the first entry is the function
    pub fn from_raw_args(mut raw: Vec<String>) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidArgument {
                name: "function".into(),
                reason: "no function name given".into(),
            });
        }
        let function = raw.remove(0);
        Ok(Self {
            function,
            args: raw,
        })
    }

    /// Resolve the unqualified function name.
    ///
    /// A qualifier other than this contract's name is an unknown function.
    pub fn function_name(&self) -> Result<&str> {
        match self.function.split_once(':') {
            Some((contract, name)) if contract == StudentContract::NAME => Ok(name),
            Some(_) => Err(Error::UnknownFunction(self.function.clone())),
            None => Ok(self.function.as_str()),
        }
    }
}

/// Result of an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// 200 on success, 500 on failure
    pub status: u16,
    /// Error message, empty on success
    pub message: String,
    /// Result or error payload
    pub payload: Vec<u8>,
}

impl Response {
    /// Success status
    pub const OK: u16 = 200;
    /// Failure status
    pub const ERROR: u16 = 500;

    /// Successful response carrying `payload`
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response for `error`
    pub fn error(error: &Error) -> Self {
        Self {
            status: Self::ERROR,
            message: error.to_string(),
            payload: error.to_wire_error().to_json_bytes(),
        }
    }

    /// Check if the invocation succeeded
    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }

    /// Decode the payload as JSON
    pub fn payload_json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.payload)
    }
}

impl StudentContract {
    /// Route an invocation and wrap the outcome in a [`Response`].
    pub fn invoke(&self, ctx: &dyn TransactionContext, invocation: &Invocation) -> Response {
        debug!(
            tx_id = ctx.tx_id(),
            function = %invocation.function,
            args = invocation.args.len(),
            "invoke"
        );
        match self.dispatch(ctx, invocation) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                warn!(
                    tx_id = ctx.tx_id(),
                    function = %invocation.function,
                    code = e.error_code(),
                    "invocation failed: {}",
                    e
                );
                Response::error(&e)
            }
        }
    }

    /// Route an invocation, returning the JSON payload on success.
    pub fn dispatch(&self, ctx: &dyn TransactionContext, invocation: &Invocation) -> Result<Vec<u8>> {
        let name = invocation.function_name()?;
        let function = FunctionMetadata::lookup(name)
            .ok_or_else(|| Error::UnknownFunction(invocation.function.clone()))?;
        let args = check_arity(function, &invocation.args)?;

        match function.name {
            "InitLedger" => {
                self.init_ledger(ctx)?;
                Ok(Vec::new())
            }
            "CreateStudent" => {
                let age = parse_age(&args[3])?;
                self.create_student(ctx, &args[0], &args[1], &args[2], age, &args[4])?;
                Ok(Vec::new())
            }
            "ReadStudent" => to_payload(&self.read_student(ctx, &args[0])?),
            "UpdateStudent" => {
                let age = parse_age(&args[3])?;
                self.update_student(ctx, &args[0], &args[1], &args[2], age, &args[4])?;
                Ok(Vec::new())
            }
            "DeleteStudent" => {
                self.delete_student(ctx, &args[0])?;
                Ok(Vec::new())
            }
            "GetAllStudents" => to_payload(&self.get_all_students(ctx)?),
            "GetMetadata" => to_payload(&self.metadata()),
            _ => Err(Error::UnknownFunction(invocation.function.clone())),
        }
    }

    /// Names of all routable functions
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> {
        FUNCTIONS.iter().map(|f| f.name)
    }
}

fn check_arity<'a>(function: &FunctionMetadata, args: &'a [String]) -> Result<&'a [String]> {
    if args.len() != function.parameters.len() {
        return Err(Error::InvalidArgument {
            name: "args".into(),
            reason: format!(
                "{} expects {} argument(s) ({}), got {}",
                function.name,
                function.parameters.len(),
                function.parameters.join(", "),
                args.len()
            ),
        });
    }
    Ok(args)
}

fn parse_age(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| Error::InvalidArgument {
        name: "age".into(),
        reason: format!("'{}' is not an integer: {}", raw, e),
    })
}

fn to_payload<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::Serialization(e.to_string()))
}
