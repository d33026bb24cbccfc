use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::borrow::Cow;
use std::collections::HashMap;

/// Inbound request as delivered by the HTTP gateway.
///
/// Path parameters are kept as raw JSON values: gateways send `null` for a
/// parameter they could not bind, and that must reach the handler as an
/// absent parameter rather than an unreadable event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, Value>>,
}

impl GatewayEvent {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            http_method: Some(method.to_string()),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_path_parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), Value::String(value.into()));
        self
    }

    /// Value of a path parameter; `null` counts as absent and non-string
    /// values are rendered as JSON text.
    pub fn path_parameter(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.path_parameters.as_ref()?.get(name)? {
            Value::Null => None,
            Value::String(value) => Some(Cow::Borrowed(value.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// Outbound response; `body` is a JSON document encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    /// `{"message": ...}` with status 200.
    pub fn message(text: &str) -> Self {
        Self {
            status_code: 200,
            body: json!({ "message": text }).to_string(),
        }
    }

    /// `{"error": ...}` with the given status.
    pub fn error(status_code: u16, text: &str) -> Self {
        Self {
            status_code,
            body: json!({ "error": text }).to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status_code: 404,
            body: json!({ "message": RequestError::RouteNotFound.to_string() }).to_string(),
        }
    }
}

impl From<RequestError> for GatewayResponse {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::RouteNotFound => Self::not_found(),
            other => Self::error(other.status_code(), &other.to_string()),
        }
    }
}
