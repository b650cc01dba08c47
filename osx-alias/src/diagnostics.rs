//! Structured diagnostic records.
//!
//! The resolver reports what it saw at each step through an injected
//! [`Diagnostics`] sink. The default sink discards everything; the
//! [`Logger`](crate::Logger) prints records at verbose level.

use serde_json::{Map, Value};

/// Receives diagnostic records from the resolver.
pub trait Diagnostics {
    /// Record `event` with the given fields (normally a JSON object).
    fn record(&self, event: &str, fields: Value);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&self, _event: &str, _fields: Value) {}
}

/// Format a record as a single `DEBUG: {json}` line.
///
/// The JSON object holds an `event` key alongside the fields. Fields that
/// are not an object are stored under `value`.
///
/// # Examples
///
/// ```
/// use osx_alias::diagnostics::diagnostic_line;
/// use serde_json::json;
///
/// let line = diagnostic_line("result", json!({ "output": "/Users/x/" }));
/// assert_eq!(line, r#"DEBUG: {"event":"result","output":"/Users/x/"}"#);
/// ```
#[must_use]
pub fn diagnostic_line(event: &str, fields: Value) -> String {
    let mut object = Map::new();
    object.insert("event".to_string(), Value::String(event.to_string()));
    match fields {
        Value::Object(map) => object.extend(map),
        Value::Null => {}
        other => {
            object.insert("value".to_string(), other);
        }
    }
    format!("DEBUG: {}", Value::Object(object))
}
