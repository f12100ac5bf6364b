use serde_json::{Map, Value};
use std::collections::HashMap;

/// HTTP verb resolved from the raw invocation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Unknown,
}

impl HttpMethod {
    fn parse(s: &str) -> Self {
        match s {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Unknown,
        }
    }
}

/// Request body after normalization.
///
/// A malformed body is only fatal for the operations that consume one, so
/// the parse failure is carried here instead of aborting normalization.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Map<String, Value>),
    Malformed(String),
}

/// Normalized inbound request: verb, body, query parameters.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub body: RequestBody,
    pub query_params: HashMap<String, String>,
}

/// Normalize a raw invocation payload into an [`ApiRequest`].
///
/// Two raw shapes are accepted: a top-level `httpMethod` field (Lambda test
/// console), or the API Gateway HTTP API shape with the method nested under
/// `requestContext.http.method`. Anything else resolves to
/// [`HttpMethod::Unknown`]. Pure function, no side effects.
pub fn normalize(event: &Value) -> ApiRequest {
    let method = event
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            event
                .get("requestContext")
                .and_then(|ctx| ctx.get("http"))
                .and_then(|http| http.get("method"))
                .and_then(Value::as_str)
        })
        .map(HttpMethod::parse)
        .unwrap_or(HttpMethod::Unknown);

    let body = match event.get("body").and_then(Value::as_str) {
        None => RequestBody::Empty,
        Some(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => RequestBody::Json(map),
            Ok(_) => RequestBody::Malformed("request body is not a JSON object".to_string()),
            Err(e) => RequestBody::Malformed(e.to_string()),
        },
    };

    let query_params = event
        .get("queryStringParameters")
        .and_then(Value::as_object)
        .map(|params| {
            params
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    ApiRequest {
        method,
        body,
        query_params,
    }
}
