//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use student_ledger_contract::Invocation;

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run in a transaction that is committed on success
    Invoke(Invocation),
    /// Run in a transaction that is never committed
    Query(Invocation),
    /// Print contract metadata
    Metadata,
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "invoke" => Ok(CliAction::Invoke(parse_invocation(sub_matches)?)),
        "query" => Ok(CliAction::Query(parse_invocation(sub_matches)?)),
        "metadata" => Ok(CliAction::Metadata),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_invocation(matches: &ArgMatches) -> Result<Invocation, String> {
    let mut raw: Vec<String> = matches.get_one::<String>("function").cloned().into_iter().collect();
    if let Some(values) = matches.get_many::<String>("args") {
        raw.extend(values.cloned());
    }
    Invocation::from_raw_args(raw).map_err(|e| e.to_string())
}
