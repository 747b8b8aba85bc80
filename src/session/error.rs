//! Helpers for error envelopes written back to the console front-end.
//!
//! Every error is a single JSON line with a code, a message and an optional context.

use serde_json::{json, Value};

pub const INVALID_COMMAND: &str = "INVALID_COMMAND";

/// Formats an error envelope as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the offending input).
pub fn error_message(code: &str, message: &str, context: Option<Value>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    })
    .to_string()
}

/// Envelope for a console line that is not a valid command.
pub fn invalid_command_message(line: &str, reason: &str) -> String {
    error_message(
        INVALID_COMMAND,
        "Expected \"Start\", \"Restart\", \"Quit\" or {\"Turn\":\"Up|Down|Left|Right\"}.",
        Some(json!({ "input": line, "reason": reason })),
    )
}
