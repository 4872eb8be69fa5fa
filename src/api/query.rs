use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::ApiError;

/// Attribute every team carries its creation timestamp in
pub const CREATED_AT: &str = "$createdAt";

/// A single list-query directive understood by the listing API
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Limit(u64),
    Offset(u64),
    OrderDesc(String),
}

#[derive(Serialize)]
struct WireQuery<'a> {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Query {
    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Self::OrderDesc(attribute.into())
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Limit(_) => "limit",
            Self::Offset(_) => "offset",
            Self::OrderDesc(_) => "orderDesc",
        }
    }

    /// Encode as the JSON object sent in a `queries[]` parameter
    pub fn to_wire(&self) -> Result<String, ApiError> {
        serde_json::to_string(&self.wire()).map_err(ApiError::Encode)
    }

    fn wire(&self) -> WireQuery<'_> {
        let (attribute, values) = match self {
            Self::Limit(n) | Self::Offset(n) => (None, vec![json!(n)]),
            Self::OrderDesc(attr) => (Some(attr.as_str()), Vec::new()),
        };

        WireQuery {
            method: self.method(),
            attribute,
            values,
        }
    }
}
