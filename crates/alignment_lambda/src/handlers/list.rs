use serde_json::{json, Value};

use crate::adapters::session_store::SessionStore;
use crate::handlers::{
    internal_error_response, json_response, log_handler_error, log_handler_info,
    method_not_allowed_response, ApiGatewayResponse,
};

const COMPONENT: &str = "list_handler";

/// Lists alignment sessions, optionally filtered by exact `technicianId`
/// match. Storage is never touched for a wrong HTTP verb.
pub fn handle_list_event(event: Value, store: &dyn SessionStore) -> ApiGatewayResponse {
    if event["httpMethod"].as_str() != Some("GET") {
        return method_not_allowed_response();
    }

    let technician_id = event["queryStringParameters"]["technicianId"]
        .as_str()
        .filter(|value| !value.is_empty());

    match store.scan_sessions(technician_id) {
        Ok(sessions) => {
            log_handler_info(
                COMPONENT,
                "scan_completed",
                json!({
                    "technician_id": technician_id,
                    "session_count": sessions.len(),
                }),
            );
            json_response(
                200,
                json!({
                    "message": "Alignments retrieved successfully",
                    "data": sessions,
                }),
            )
        }
        Err(error) => {
            log_handler_error(
                COMPONENT,
                "scan_failed",
                json!({
                    "technician_id": technician_id,
                    "error": error,
                }),
            );
            internal_error_response(&error)
        }
    }
}
