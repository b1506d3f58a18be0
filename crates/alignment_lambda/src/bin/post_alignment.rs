use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use alignment_lambda::adapters::dynamo::DynamoSessionStore;
use alignment_lambda::handlers::create::handle_create_event;
use alignment_lambda::handlers::ApiGatewayResponse;

async fn handle_request(
    store: &DynamoSessionStore,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_create_event(event.payload, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let table_name = std::env::var("ALIGNMENT_TABLE_NAME")
        .map_err(|_| Error::from("ALIGNMENT_TABLE_NAME must be configured"))?;

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoSessionStore::new(aws_sdk_dynamodb::Client::new(&config), table_name);

    lambda_runtime::run(service_fn(|event| handle_request(&store, event))).await
}
