//! Student Ledger CLI: runs contract invocations against a local world state.
//!
//! Two modes:
//! - **Shell mode**: `student-ledger [flags] COMMAND`: single invocation, exit
//! - **Pipe mode**: `echo "invoke InitLedger" | student-ledger`: line-by-line from stdin
//!
//! World state is loaded from the `--state` snapshot file before running and
//! written back after every successful `invoke`.

mod commands;
mod format;
mod parse;
mod pipe;
mod session;

use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_response, OutputMode};
use parse::matches_to_action;
use session::SessionState;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "STUDENT_LEDGER_LOG";

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let state_path = matches
        .get_one::<String>("state")
        .cloned()
        .unwrap_or_else(|| commands::DEFAULT_STATE_PATH.to_string());

    let mut state = match SessionState::open(&state_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &mut state, output_mode)
    } else {
        pipe::run_pipe(&mut state, output_mode)
    };
    process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(action) => match state.execute(action) {
            Ok(response) if response.is_ok() => {
                let formatted = format_response(&response, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Ok(response) => {
                eprintln!("{}", format_error(&response, mode));
                1
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
