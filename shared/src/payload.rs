//! Loose payload decoding for submitted commands
//!
//! The relay accepts nearly anything: missing fields fall back to defaults,
//! `command` is case-normalized, and `speedness` is coerced from numbers or
//! numeric strings. The only hard failures are a body that is not a JSON
//! object and a field that cannot be coerced to its expected type. Range and
//! vocabulary checks are deliberately absent; the store keeps whatever the
//! decoder produced.

use serde_json::Value;
use thiserror::Error;

use crate::DEFAULT_COMMAND;

/// Errors that can occur while decoding a submitted command
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("cannot coerce field `{field}` from {found}")]
    Coercion { field: &'static str, found: String },
}

/// A decoded, type-coerced command submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCommand {
    pub command: String,
    pub speedness: i64,
}

/// Decode a raw request body into a [`SubmitCommand`].
///
/// Returns:
/// - `Ok(..)` with defaults filled in and `command` upper-cased
/// - `Err(PayloadError::Malformed)` if the body is not a JSON object
/// - `Err(PayloadError::Coercion)` if a present field has an unusable type
pub fn decode(body: &[u8]) -> Result<SubmitCommand, PayloadError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| PayloadError::Malformed(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| PayloadError::Malformed(format!("expected a JSON object, got {}", kind(&value))))?;

    let command = match object.get("command") {
        None => DEFAULT_COMMAND.to_string(),
        Some(Value::String(s)) => s.to_uppercase(),
        Some(other) => {
            return Err(PayloadError::Coercion {
                field: "command",
                found: kind(other).to_string(),
            })
        }
    };

    let speedness = match object.get("speedness") {
        None => 0,
        Some(value) => coerce_int("speedness", value)?,
    };

    Ok(SubmitCommand { command, speedness })
}

/// Coerce a JSON value to an integer: integers pass through, floats truncate
/// toward zero, numeric strings are parsed.
fn coerce_int(field: &'static str, value: &Value) -> Result<i64, PayloadError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(PayloadError::Coercion {
                    field,
                    found: format!("number {n}"),
                })
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| PayloadError::Coercion {
            field,
            found: format!("string {s:?}"),
        }),
        other => Err(PayloadError::Coercion {
            field,
            found: kind(other).to_string(),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
