use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use user_records_shared::{dispatch, dynamo::DynamoUserStore, AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    // Initialize the store once at startup
    let config = aws_config::load_from_env().await;
    let table_name = std::env::var("TABLE_NAME").unwrap_or_else(|_| "Users".to_string());
    let store = DynamoUserStore::new(DynamoClient::new(&config), table_name);
    let state = AppState::new(store);

    // Events arrive as raw JSON: method/body detection happens in the
    // normalizer, before any HTTP abstraction applies.
    run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move {
            let response = dispatch::handle_request(&event.payload, state.store.as_ref()).await;
            Ok::<Value, Error>(response.into_lambda())
        }
    }))
    .await
}
