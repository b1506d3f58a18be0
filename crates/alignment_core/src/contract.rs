use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required create-payload fields, in declaration order. Missing-field error
/// messages list names in exactly this order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "alignmentId",
    "vehicleVin",
    "technicianId",
    "startTime",
    "status",
];

pub const VALID_STATUSES: [&str; 2] = ["in-progress", "completed"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionStatus {
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// One vehicle wheel-alignment service record, keyed by `alignmentId`.
/// Records are immutable after write; unknown payload fields are carried
/// through to storage verbatim via `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlignmentSession {
    #[serde(rename = "alignmentId")]
    pub alignment_id: String,
    #[serde(rename = "vehicleVin")]
    pub vehicle_vin: String,
    #[serde(rename = "technicianId")]
    pub technician_id: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub status: SessionStatus,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
