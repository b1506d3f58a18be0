use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use crate::adapters::session_store::SessionStore;
use crate::runtime::contract::AlignmentSession;

/// DynamoDB-backed session store. The client handle is constructed once per
/// process in the binary's `main` and shared across invocations.
pub struct DynamoSessionStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoSessionStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

impl SessionStore for DynamoSessionStore {
    fn scan_sessions(&self, technician_id: Option<&str>) -> Result<Vec<AlignmentSession>, String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let technician_id = technician_id.map(str::to_string);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut request = client.scan().table_name(table_name);
                if let Some(technician_id) = technician_id {
                    request = request
                        .filter_expression("technicianId = :technicianId")
                        .expression_attribute_values(
                            ":technicianId",
                            AttributeValue::S(technician_id),
                        );
                }

                let output = request
                    .send()
                    .await
                    .map_err(|error| format!("failed to scan alignment table: {error}"))?;

                output.items().iter().map(item_to_session).collect()
            })
        })
    }

    fn put_session(&self, session: &AlignmentSession) -> Result<(), String> {
        let item = session_to_item(session)?;
        let client = self.client.clone();
        let table_name = self.table_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to put alignment session: {error}"))
            })
        })
    }
}

pub fn session_to_item(
    session: &AlignmentSession,
) -> Result<HashMap<String, AttributeValue>, String> {
    let value = serde_json::to_value(session)
        .map_err(|error| format!("failed to serialize alignment session: {error}"))?;
    let Value::Object(fields) = value else {
        return Err("alignment session must serialize to a JSON object".to_string());
    };

    fields
        .into_iter()
        .map(|(name, value)| Ok((name, json_to_attribute(value)?)))
        .collect()
}

pub fn item_to_session(item: &HashMap<String, AttributeValue>) -> Result<AlignmentSession, String> {
    let fields = item
        .iter()
        .map(|(name, attribute)| Ok((name.clone(), attribute_to_json(attribute)?)))
        .collect::<Result<Map<String, Value>, String>>()?;

    serde_json::from_value(Value::Object(fields))
        .map_err(|error| format!("stored alignment item is malformed: {error}"))
}

fn json_to_attribute(value: Value) -> Result<AttributeValue, String> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text),
        Value::Array(values) => AttributeValue::L(
            values
                .into_iter()
                .map(json_to_attribute)
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, value)| Ok((name, json_to_attribute(value)?)))
                .collect::<Result<_, String>>()?,
        ),
    })
}

fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, String> {
    Ok(match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(flag) => Value::Bool(*flag),
        AttributeValue::S(text) => Value::String(text.clone()),
        AttributeValue::N(text) => {
            if let Ok(number) = text.parse::<i64>() {
                Value::from(number)
            } else if let Ok(number) = text.parse::<u64>() {
                Value::from(number)
            } else {
                let number = text
                    .parse::<f64>()
                    .map_err(|_| format!("invalid numeric attribute: {text}"))?;
                Number::from_f64(number)
                    .map(Value::Number)
                    .ok_or_else(|| format!("non-finite numeric attribute: {text}"))?
            }
        }
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, attribute)| Ok((name.clone(), attribute_to_json(attribute)?)))
                .collect::<Result<Map<String, Value>, String>>()?,
        ),
        other => return Err(format!("unsupported attribute type: {other:?}")),
    })
}
