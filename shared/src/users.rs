use crate::response::ApiResponse;
use crate::store::UserStore;
use crate::types::{UserPatch, UserRecord};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Fields a create body must carry. The same six fields make up the full
/// record: a record never exists with a subset of them.
const REQUIRED_FIELDS: [&str; 6] = ["email", "name", "dob", "gender", "weight", "height"];

/// Create (or overwrite) a user record from a POST body.
///
/// A put with an already-used email replaces the existing record wholesale;
/// there is deliberately no existence check.
pub async fn create_user(store: &dyn UserStore, body: &Map<String, Value>) -> ApiResponse {
    if !REQUIRED_FIELDS.iter().all(|field| body.contains_key(*field)) {
        return ApiResponse::error(400, "Missing required user fields");
    }

    let record: UserRecord = match serde_json::from_value(Value::Object(body.clone())) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Rejecting create with mistyped fields: {}", e);
            return ApiResponse::error(400, format!("Invalid user payload: {e}"));
        }
    };

    match store.put(&record).await {
        Ok(()) => ApiResponse::message(201, "User created successfully"),
        Err(e) => {
            tracing::error!("Error creating user: {}", e);
            ApiResponse::error(500, e.to_string())
        }
    }
}

/// Fetch a user record by the `email` query parameter.
pub async fn get_user(store: &dyn UserStore, query_params: &HashMap<String, String>) -> ApiResponse {
    let email = match query_params.get("email").filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => return ApiResponse::error(400, "Email is required"),
    };

    match store.get(email).await {
        Ok(Some(record)) => match serde_json::to_value(&record) {
            Ok(body) => ApiResponse::new(200, body),
            Err(e) => ApiResponse::error(500, e.to_string()),
        },
        Ok(None) => ApiResponse::error(404, "User not found"),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            ApiResponse::error(500, e.to_string())
        }
    }
}

/// Apply a partial update from a PUT body: email is required, any subset of
/// the mutable fields is applied, absent fields stay untouched.
pub async fn update_user(store: &dyn UserStore, body: &Map<String, Value>) -> ApiResponse {
    let email = match body.get("email").and_then(Value::as_str).filter(|e| !e.is_empty()) {
        Some(email) => email.to_string(),
        None => return ApiResponse::error(400, "Email is required"),
    };

    let patch: UserPatch = match serde_json::from_value(Value::Object(body.clone())) {
        Ok(patch) => patch,
        Err(e) => {
            tracing::warn!("Rejecting update with mistyped fields: {}", e);
            return ApiResponse::error(400, format!("Invalid user payload: {e}"));
        }
    };

    if patch.is_empty() {
        return ApiResponse::error(400, "Nothing to update");
    }

    match store.update_partial(&email, &patch).await {
        Ok(()) => ApiResponse::message(200, "User updated successfully"),
        Err(e) => {
            tracing::error!("Error updating user: {}", e);
            ApiResponse::error(500, e.to_string())
        }
    }
}

/// Delete a user record by email. Idempotent: deleting an absent email still
/// reports success, per the store contract.
pub async fn delete_user(store: &dyn UserStore, email: Option<&str>) -> ApiResponse {
    let email = match email.filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => return ApiResponse::error(400, "Email is required"),
    };

    match store.delete(email).await {
        Ok(()) => ApiResponse::message(200, "User deleted successfully"),
        Err(e) => {
            tracing::error!("Error deleting user: {}", e);
            ApiResponse::error(500, e.to_string())
        }
    }
}
