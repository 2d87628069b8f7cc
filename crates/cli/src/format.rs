//! Response formatting.
//!
//! - **Human**: payload pretty-printed as JSON, `OK` for empty payloads,
//!   `(error) message` for failures
//! - **Json**: payloads and wire errors printed as compact JSON

use student_ledger_contract::Response;

/// Output style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Readable output
    Human,
    /// Raw JSON payloads
    Json,
}

/// Format a successful response
pub fn format_response(response: &Response, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => String::from_utf8_lossy(&response.payload).into_owned(),
        OutputMode::Human if response.payload.is_empty() => "OK".to_string(),
        OutputMode::Human => match serde_json::from_slice::<serde_json::Value>(&response.payload) {
            Ok(value) => serde_json::to_string_pretty(&value)
                .unwrap_or_else(|_| String::from_utf8_lossy(&response.payload).into_owned()),
            Err(_) => String::from_utf8_lossy(&response.payload).into_owned(),
        },
    }
}

/// Format a failed response
pub fn format_error(response: &Response, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => String::from_utf8_lossy(&response.payload).into_owned(),
        OutputMode::Human => format!("(error) {}", response.message),
    }
}
