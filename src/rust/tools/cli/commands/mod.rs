pub mod demo;
pub mod emit;
pub mod time;

use serde_json::Value;

use crate::tools::logger::LogValue;

/// Command-line arguments become JSON values when they parse as JSON
/// (`42`, `true`, `{"a":1}`), plain strings otherwise.
pub(crate) fn parse_value(raw: &str) -> LogValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => LogValue::Json(value),
        Err(_) => LogValue::Str(raw.to_string()),
    }
}

pub(crate) fn parse_values(raw: &[String]) -> Vec<LogValue> {
    raw.iter().map(|arg| parse_value(arg)).collect()
}

#[cfg(test)]
#[path = "test_commands.rs"]
mod tests;
