//! Command tree.
//!
//! Shared by shell mode (parsed from argv) and pipe mode (parsed per line
//! with no binary name).

use clap::{Arg, ArgAction, Command};

/// Snapshot file used when `--state` is not given
pub const DEFAULT_STATE_PATH: &str = ".student-ledger.json";

/// Build the full command line interface
pub fn build_cli() -> Command {
    Command::new("student-ledger")
        .about("Run student registry chaincode invocations against a local world state")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("state")
                .long("state")
                .short('s')
                .value_name("PATH")
                .env("STUDENT_LEDGER_STATE")
                .default_value(DEFAULT_STATE_PATH)
                .global(true)
                .help("World state snapshot file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print raw JSON payloads"),
        )
        .subcommand(function_command(
            "invoke",
            "Submit a transaction and commit its writes",
        ))
        .subcommand(function_command(
            "query",
            "Evaluate a transaction without committing",
        ))
        .subcommand(Command::new("metadata").about("Print the contract metadata"))
}

/// Build the command tree used for pipe-mode lines
pub fn build_line_cli() -> Command {
    build_cli().no_binary_name(true)
}

fn function_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("function")
                .required(true)
                .help("Function name, e.g. CreateStudent"),
        )
        .arg(
            Arg::new("args")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Function arguments in parameter order"),
        )
}
