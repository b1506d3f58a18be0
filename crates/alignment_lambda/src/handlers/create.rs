use serde_json::{json, Value};

use crate::adapters::session_store::SessionStore;
use crate::handlers::{
    internal_error_response, json_response, log_handler_error, log_handler_info,
    method_not_allowed_response, validation_error_response, ApiGatewayResponse,
};
use crate::runtime::contract::AlignmentSession;
use crate::runtime::validate::validate_session_payload;

const COMPONENT: &str = "create_handler";

/// Validates a submitted alignment-session payload and persists it keyed by
/// `alignmentId` (unconditional upsert). Validation short-circuits on the
/// first failing check; storage is only reached by fully valid payloads.
///
/// A malformed request body surfaces as a 500, matching the reference
/// contract's generic catch-all.
pub fn handle_create_event(event: Value, store: &dyn SessionStore) -> ApiGatewayResponse {
    if event["httpMethod"].as_str() != Some("POST") {
        return method_not_allowed_response();
    }

    let Some(raw_body) = event["body"].as_str() else {
        return internal_error_response("Request body must be a JSON-encoded string");
    };

    let payload: Value = match serde_json::from_str(raw_body) {
        Ok(value) => value,
        Err(error) => {
            return internal_error_response(&format!("Malformed JSON body: {error}"));
        }
    };

    if let Err(error) = validate_session_payload(&payload) {
        log_handler_info(
            COMPONENT,
            "payload_rejected",
            json!({"reason": error.message()}),
        );
        return validation_error_response(error.message());
    }

    let session: AlignmentSession = match serde_json::from_value(payload) {
        Ok(value) => value,
        Err(error) => {
            return internal_error_response(&format!("Malformed session payload: {error}"));
        }
    };

    match store.put_session(&session) {
        Ok(()) => {
            log_handler_info(
                COMPONENT,
                "session_created",
                json!({
                    "alignment_id": session.alignment_id,
                    "technician_id": session.technician_id,
                    "status": session.status.as_str(),
                }),
            );
            json_response(
                201,
                json!({
                    "message": "Alignment session created successfully",
                    "data": session,
                }),
            )
        }
        Err(error) => {
            log_handler_error(
                COMPONENT,
                "put_failed",
                json!({
                    "alignment_id": session.alignment_id,
                    "error": error,
                }),
            );
            internal_error_response(&error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct RecordingStore {
        puts: Mutex<Vec<AlignmentSession>>,
        failure: Option<String>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                puts: Mutex::new(Vec::new()),
                failure: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                puts: Mutex::new(Vec::new()),
                failure: Some(message.to_string()),
            }
        }

        fn puts(&self) -> Vec<AlignmentSession> {
            self.puts.lock().expect("poisoned mutex").clone()
        }
    }

    impl SessionStore for RecordingStore {
        fn scan_sessions(
            &self,
            _technician_id: Option<&str>,
        ) -> Result<Vec<AlignmentSession>, String> {
            panic!("create handler must not read from storage");
        }

        fn put_session(&self, session: &AlignmentSession) -> Result<(), String> {
            if let Some(message) = &self.failure {
                return Err(message.clone());
            }
            self.puts
                .lock()
                .expect("poisoned mutex")
                .push(session.clone());
            Ok(())
        }
    }

    fn valid_payload() -> Value {
        json!({
            "alignmentId": "align001",
            "vehicleVin": "1HGCM82633A123456",
            "technicianId": "tech001",
            "startTime": "2024-12-31T21:35:13.174Z",
            "endTime": "2024-12-31T22:05:13.174Z",
            "status": "in-progress",
        })
    }

    fn post_event(payload: &Value) -> Value {
        json!({"httpMethod": "POST", "body": payload.to_string()})
    }

    fn body_json(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("response body should be JSON")
    }

    #[test]
    fn rejects_non_post_methods_without_touching_storage() {
        let store = RecordingStore::new();
        let response = handle_create_event(json!({"httpMethod": "GET"}), &store);

        assert_eq!(response.status_code, 405);
        assert_eq!(body_json(&response)["message"], "Method not allowed");
        assert!(store.puts().is_empty());
    }

    #[test]
    fn persists_a_valid_payload_and_echoes_it_back() {
        let store = RecordingStore::new();
        let payload = valid_payload();
        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 201);
        let body = body_json(&response);
        assert_eq!(body["message"], "Alignment session created successfully");
        assert_eq!(body["data"], payload);

        let puts = store.puts();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].alignment_id, "align001");
    }

    #[test]
    fn unknown_payload_fields_are_persisted_verbatim() {
        let store = RecordingStore::new();
        let mut payload = valid_payload();
        payload["bayNumber"] = json!(4);

        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 201);
        assert_eq!(body_json(&response)["data"]["bayNumber"], 4);
        assert_eq!(store.puts()[0].extra.get("bayNumber"), Some(&json!(4)));
    }

    #[test]
    fn missing_fields_yield_a_declaration_order_400() {
        let store = RecordingStore::new();
        let payload = json!({"vehicleVin": "1HGCM82633A123456"});
        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Invalid input. Missing required fields: alignmentId, technicianId, startTime, status"
        );
        assert!(store.puts().is_empty());
    }

    #[test]
    fn an_invalid_status_yields_the_enumerated_400() {
        let store = RecordingStore::new();
        let mut payload = valid_payload();
        payload["status"] = json!("done");

        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Invalid 'status'. Must be one of: in-progress, completed"
        );
        assert!(store.puts().is_empty());
    }

    #[test]
    fn a_non_canonical_start_time_yields_a_400() {
        let store = RecordingStore::new();
        let mut payload = valid_payload();
        payload["startTime"] = json!("2025-01-01");

        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Invalid 'startTime'. Must be a valid ISO 8601 date-time string."
        );
        assert!(store.puts().is_empty());
    }

    #[test]
    fn a_non_canonical_end_time_yields_a_400() {
        let store = RecordingStore::new();
        let mut payload = valid_payload();
        payload["endTime"] = json!("invalid-date");

        let response = handle_create_event(post_event(&payload), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Invalid 'endTime'. Must be a valid ISO 8601 date-time string."
        );
        assert!(store.puts().is_empty());
    }

    #[test]
    fn a_malformed_body_surfaces_as_an_internal_error() {
        let store = RecordingStore::new();
        let response = handle_create_event(
            json!({"httpMethod": "POST", "body": "{not json"}),
            &store,
        );

        assert_eq!(response.status_code, 500);
        let body = body_json(&response);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"]
            .as_str()
            .expect("error should be a string")
            .starts_with("Malformed JSON body"));
        assert!(store.puts().is_empty());
    }

    #[test]
    fn a_missing_body_surfaces_as_an_internal_error() {
        let store = RecordingStore::new();
        let response = handle_create_event(json!({"httpMethod": "POST"}), &store);

        assert_eq!(response.status_code, 500);
        assert_eq!(body_json(&response)["message"], "Internal server error");
        assert!(store.puts().is_empty());
    }

    #[test]
    fn storage_failures_surface_the_underlying_error_text() {
        let store = RecordingStore::failing("provisioned throughput exceeded");
        let response = handle_create_event(post_event(&valid_payload()), &store);

        assert_eq!(response.status_code, 500);
        let body = body_json(&response);
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "provisioned throughput exceeded");
    }
}
