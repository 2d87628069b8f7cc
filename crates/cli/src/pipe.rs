//! Pipe mode: one command per stdin line.
//!
//! Lines are split with shell quoting rules and parsed with the same command
//! tree as shell mode, minus the binary name:
//!
//! ```text
//! # seed, then add a record
//! invoke InitLedger
//! invoke CreateStudent 3 "Luis Miguel" Gómez 23 Derecho
//! query GetAllStudents
//! ```
//!
//! Blank lines and `#` comments are skipped. Global flags on a line are
//! accepted but ignored; the session's state file and output mode are fixed
//! at startup.

use std::io::{self, BufRead};

use crate::commands::build_line_cli;
use crate::format::{format_error, format_response, OutputMode};
use crate::parse::{matches_to_action, CliAction};
use crate::session::SessionState;

/// Read and execute lines from stdin. Returns the process exit code.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    run_lines(state, mode, stdin.lock())
}

/// Execute every line from `input`. Returns 1 if any line failed.
pub fn run_lines(state: &mut SessionState, mode: OutputMode, input: impl BufRead) -> i32 {
    let mut exit_code = 0;
    for (number, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) failed to read stdin: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = match parse_line(trimmed) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("(error) line {}: {}", number + 1, e);
                exit_code = 1;
                continue;
            }
        };

        match state.execute(action) {
            Ok(response) if response.is_ok() => {
                let formatted = format_response(&response, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
            }
            Ok(response) => {
                eprintln!("{}", format_error(&response, mode));
                exit_code = 1;
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                exit_code = 1;
            }
        }
    }
    exit_code
}

/// Split and parse one line
pub fn parse_line(line: &str) -> Result<CliAction, String> {
    let words = shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())?;
    let matches = build_line_cli()
        .try_get_matches_from(words)
        .map_err(|e| e.to_string().trim_end().to_string())?;
    matches_to_action(&matches)
}
