pub mod create;
pub mod list;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

pub(crate) fn json_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        body: payload.to_string(),
    }
}

pub(crate) fn method_not_allowed_response() -> ApiGatewayResponse {
    json_response(405, json!({"message": "Method not allowed"}))
}

pub(crate) fn validation_error_response(message: &str) -> ApiGatewayResponse {
    json_response(400, json!({"message": message}))
}

pub(crate) fn internal_error_response(error: &str) -> ApiGatewayResponse {
    json_response(
        500,
        json!({
            "message": "Internal server error",
            "error": error,
        }),
    )
}

pub(crate) fn log_handler_info(component: &str, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub(crate) fn log_handler_error(component: &str, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
