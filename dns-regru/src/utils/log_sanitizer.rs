//! Log sanitization utilities
//!
//! Prevents sensitive data (account passwords, oversized provider responses)
//! from being fully exposed in debug/error logs.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Replacement for redacted values.
const REDACTED: &str = "***";

/// Payload keys whose values never reach the log.
const SECRET_FIELDS: &[&str] = &["password"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask secret fields of a JSON object payload for logging.
///
/// Input that is not a JSON object is replaced wholesale.
pub fn redact_secrets(json: &str) -> String {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(mut map)) => {
            for field in SECRET_FIELDS {
                if let Some(value) = map.get_mut(*field) {
                    *value = Value::String(REDACTED.to_string());
                }
            }
            Value::Object(map).to_string()
        }
        _ => format!("<{} bytes, not a JSON object>", json.len()),
    }
}
