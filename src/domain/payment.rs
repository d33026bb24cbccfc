use crate::error::RequestError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Primary key of a payment order, assigned by the caller.
pub type PaymentId = i64;

/// Fields a create request must carry, in the order they are checked.
pub const REQUIRED_CREATE_FIELDS: [&str; 5] = ["id", "id_pedido", "estado", "valor", "metodo"];

/// Field an update request must carry.
pub const STATUS_FIELD: &str = "estado";

/// Reference to the external order a payment belongs to.
///
/// Order ids arrive both as JSON numbers and as strings. Whole-number floats
/// such as `55.0` are read as integers; fractional numbers are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderRef {
    Numeric(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for OrderRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(OrderRef::Text(id)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .map(OrderRef::Numeric)
                .ok_or_else(|| D::Error::custom(format!("id_pedido must be a whole number, got {n}"))),
            other => Err(D::Error::custom(format!(
                "id_pedido must be a number or string, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRef::Numeric(id) => write!(f, "{}", id),
            OrderRef::Text(id) => f.write_str(id),
        }
    }
}

/// A persisted payment order.
///
/// `created_at` is stamped once when the order is built and is never
/// touched again; only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: PaymentId,
    #[serde(rename = "id_pedido")]
    pub order_id: OrderRef,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "metodo")]
    pub method: String,
    #[serde(rename = "referencia", default)]
    pub reference: Option<String>,
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<Utc>,
}

/// Validated body of a create request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatePaymentRequest {
    pub id: PaymentId,
    #[serde(rename = "id_pedido")]
    pub order_id: OrderRef,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "metodo")]
    pub method: String,
    #[serde(rename = "referencia", default)]
    pub reference: Option<String>,
}

impl CreatePaymentRequest {
    /// Parses and validates a raw request body.
    ///
    /// Presence of every required field is checked before any field is
    /// typed, so a request missing `estado` is reported as such even when
    /// `id` also has the wrong type.
    pub fn from_body(body: Option<&str>) -> Result<Self, RequestError> {
        Self::from_fields(parse_body(body)?)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, RequestError> {
        let missing = missing_fields(&fields, &REQUIRED_CREATE_FIELDS);
        if !missing.is_empty() {
            return Err(RequestError::MissingFields(missing));
        }
        typed(fields)
    }

    /// Builds the record to persist, stamped with `created_at`.
    pub fn into_order(self, created_at: DateTime<Utc>) -> PaymentOrder {
        PaymentOrder {
            id: self.id,
            order_id: self.order_id,
            status: self.status,
            amount: self.amount,
            method: self.method,
            reference: self.reference,
            created_at,
        }
    }
}

/// Validated body of a status update request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(rename = "estado")]
    pub status: String,
}

impl UpdateStatusRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, RequestError> {
        Self::from_fields(parse_body(body)?)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, RequestError> {
        let missing = missing_fields(&fields, &[STATUS_FIELD]);
        if !missing.is_empty() {
            return Err(RequestError::MissingFields(missing));
        }
        typed(fields)
    }
}

/// Returns the trimmed identifier, failing when it is absent or blank.
pub fn require_identifier(raw: Option<&str>) -> Result<&str, RequestError> {
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(RequestError::MissingIdentifier)
}

/// Parses the identifier carried in the webhook path.
pub fn parse_payment_id(raw: &str) -> Result<PaymentId, RequestError> {
    raw.trim()
        .parse()
        .map_err(|_| RequestError::InvalidIdentifier(raw.to_string()))
}

/// Returns every field of `required` absent from `fields`, in order.
pub fn missing_fields(fields: &Map<String, Value>, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|field| !fields.contains_key(*field))
        .collect()
}

/// Parses a request body that must be a JSON object.
pub fn parse_body(body: Option<&str>) -> Result<Map<String, Value>, RequestError> {
    let body = body.ok_or_else(|| RequestError::MalformedInput("corpo ausente".to_string()))?;
    match serde_json::from_str(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(RequestError::MalformedInput(format!(
            "esperado um objeto JSON, recebido {}",
            json_kind(&other)
        ))),
        Err(e) => Err(RequestError::MalformedInput(e.to_string())),
    }
}

fn typed<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, RequestError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| RequestError::InvalidField(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
