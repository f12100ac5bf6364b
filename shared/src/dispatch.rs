use crate::request::{self, ApiRequest, HttpMethod, RequestBody};
use crate::response::ApiResponse;
use crate::store::UserStore;
use crate::users;
use serde_json::{Map, Value};

/// Normalize a raw invocation payload and route it to a handler.
pub async fn handle_request(event: &Value, store: &dyn UserStore) -> ApiResponse {
    let request = request::normalize(event);
    tracing::info!("Dispatching {:?} request", request.method);
    dispatch(&request, store).await
}

/// Route a normalized request to exactly one operation handler. Pure
/// routing: all validation lives in the handlers.
pub async fn dispatch(request: &ApiRequest, store: &dyn UserStore) -> ApiResponse {
    match request.method {
        HttpMethod::Get => users::get_user(store, &request.query_params).await,
        HttpMethod::Post => match &request.body {
            RequestBody::Json(body) => users::create_user(store, body).await,
            RequestBody::Empty => users::create_user(store, &Map::new()).await,
            RequestBody::Malformed(err) => malformed_body(err),
        },
        HttpMethod::Put => match &request.body {
            RequestBody::Json(body) => users::update_user(store, body).await,
            RequestBody::Empty => users::update_user(store, &Map::new()).await,
            RequestBody::Malformed(err) => malformed_body(err),
        },
        HttpMethod::Delete => {
            let email = request.query_params.get("email").map(String::as_str);
            users::delete_user(store, email).await
        }
        HttpMethod::Unknown => ApiResponse::error(400, "Unsupported method"),
    }
}

// Parse failures are terminal for body-consuming operations, surfaced like
// any other store-layer failure.
fn malformed_body(err: &str) -> ApiResponse {
    tracing::error!("Failed to parse request body: {}", err);
    ApiResponse::error(500, err)
}
