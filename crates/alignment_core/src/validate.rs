use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::contract::{ValidationError, REQUIRED_FIELDS, VALID_STATUSES};

/// Validates a parsed create-request payload against the alignment-session
/// contract: required fields, status enum, then canonical date-times.
///
/// The check order is part of the observable contract; a payload failing
/// several checks always reports the earliest one.
pub fn validate_session_payload(payload: &Value) -> Result<(), ValidationError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !is_field_present(payload.get(*field)))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::new(format!(
            "Invalid input. Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let status_is_valid = payload
        .get("status")
        .and_then(Value::as_str)
        .map(|status| VALID_STATUSES.contains(&status))
        .unwrap_or(false);
    if !status_is_valid {
        return Err(ValidationError::new(format!(
            "Invalid 'status'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )));
    }

    if !field_is_canonical_datetime(payload.get("startTime")) {
        return Err(ValidationError::new(
            "Invalid 'startTime'. Must be a valid ISO 8601 date-time string.",
        ));
    }

    // endTime is optional; the reference contract only checks it when it is
    // present and non-falsy.
    if is_field_present(payload.get("endTime"))
        && !field_is_canonical_datetime(payload.get("endTime"))
    {
        return Err(ValidationError::new(
            "Invalid 'endTime'. Must be a valid ISO 8601 date-time string.",
        ));
    }

    Ok(())
}

/// A string is a canonical ISO 8601 date-time iff it parses as RFC 3339 and
/// re-serializing the UTC instant at millisecond precision reproduces the
/// input exactly. Parseable but non-canonical forms ("2025-01-01T00:00:00Z",
/// "+00:00" offsets) are rejected.
pub fn is_canonical_datetime(text: &str) -> bool {
    let Ok(parsed) = DateTime::parse_from_rfc3339(text) else {
        return false;
    };
    parsed
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        == text
}

fn field_is_canonical_datetime(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(is_canonical_datetime)
        .unwrap_or(false)
}

// Presence follows the reference contract's falsiness rule: null, "", false,
// and 0 all count as missing.
fn is_field_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Some(_) => true,
    }
}
