use serde_json::{json, Value};

/// Handler result: a status code plus a JSON body. Serialized into the
/// Lambda proxy response envelope once, at the end of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    pub fn message(status_code: u16, message: &str) -> Self {
        Self::new(status_code, json!({ "message": message }))
    }

    pub fn error(status_code: u16, error: impl Into<String>) -> Self {
        Self::new(status_code, json!({ "error": error.into() }))
    }

    /// Build the Lambda proxy envelope: `{"statusCode": n, "body": "..."}`
    /// with the body JSON-encoded as a string. Total, never fails.
    pub fn into_lambda(self) -> Value {
        json!({
            "statusCode": self.status_code,
            "body": self.body.to_string(),
        })
    }
}
