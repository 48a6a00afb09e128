//! JSON output formatting

use serde::Serialize;

/// Record printed instead of an outcome when a run fails
#[derive(Debug, Serialize)]
pub struct Failure<'a> {
    pub failed: bool,
    pub msg: &'a str,
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Format a failure record
pub fn format_failure(msg: &str) -> Result<String, serde_json::Error> {
    format_json(&Failure { failed: true, msg })
}
