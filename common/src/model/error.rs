//! Normalization of failed gateway responses into display strings.
//!
//! The gateway (and the services behind it) reports failures as a JSON body
//! with a `detail` and/or `message` field, but callers that requested a
//! binary result receive that body as raw bytes, and a dead network yields
//! no body at all. Every entry point here is total: any input produces a
//! non-empty `String`, never a panic.

use serde_json::Value;

/// Fallback when the server rejected the request but the body carried no
/// recognizable error field.
pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";

/// Fallback when the rejection body could not be decoded at all.
pub const UNREADABLE_RESPONSE: &str = "Failed to process server response";

/// Fallback when the request never produced a response.
pub const GENERIC_TRANSPORT_ERROR: &str = "An unexpected error occurred";

/// Normalizes a rejection body from a call that expected a binary result.
///
/// The body arrived as bytes and has already been decoded to text. If it
/// parses as JSON, the `detail`/`message` fields are extracted; a parse
/// failure means the payload was something else entirely (truncated bytes,
/// an HTML error page) and yields the fixed [`UNREADABLE_RESPONSE`] string.
pub fn message_from_binary_body(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => field_message(&value).unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        Err(_) => UNREADABLE_RESPONSE.to_string(),
    }
}

/// Normalizes a rejection body from a call that expected a JSON result.
///
/// Same field extraction as [`message_from_binary_body`], but a structured
/// body without the known fields is shown whole rather than replaced with
/// a generic string.
pub fn message_from_json_body(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => field_message(&value).unwrap_or_else(|| value.to_string()),
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    }
}

/// Normalizes a transport-level failure (the request produced no response).
pub fn message_from_transport(detail: &str) -> String {
    if detail.trim().is_empty() {
        GENERIC_TRANSPORT_ERROR.to_string()
    } else {
        detail.to_string()
    }
}

/// Extracts `detail` or `message` from a parsed body, in that order.
///
/// The gateway proxies upstream errors verbatim, so `detail` is not always
/// a string; non-string values are serialized. Empty strings and nulls are
/// treated as absent.
fn field_message(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    for key in ["detail", "message"] {
        match object.get(key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(text)) if text.is_empty() => continue,
            Some(Value::String(text)) => return Some(text.clone()),
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}
