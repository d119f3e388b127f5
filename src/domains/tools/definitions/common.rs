//! Common types and helpers shared across the ShipStation tools.
//!
//! Result envelopes, payload parsing, and conversion of typed parameter
//! structs into query strings and request bodies.

use std::num::NonZeroU64;

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::api::QueryParams;
use crate::domains::tools::ToolError;

/// Positive numeric ShipStation identifier. Zero is rejected at validation.
pub type Id = NonZeroU64;

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Sort direction accepted by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDir {
    Asc,
    Desc,
}

// String payloads are parsed when the tool runs, so a malformed string is a
// tool error result rather than a validation failure.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
#[schemars(description = "JSON document, either as a JSON-encoded string or as a JSON object")]
pub enum JsonPayload {
    Text(String),
    Structured(Value),
}

impl JsonPayload {
    /// Resolve the payload into a JSON value. `field` names the parameter in errors.
    pub fn into_value(self, field: &'static str) -> Result<Value, ToolError> {
        match self {
            Self::Text(raw) => {
                serde_json::from_str(&raw).map_err(|e| ToolError::parse(field, e))
            }
            Self::Structured(value) => Ok(value),
        }
    }
}

/// Serialize a parameter struct into query parameters, dropping absent fields.
pub fn query_from<T: Serialize>(params: &T) -> Result<QueryParams, ToolError> {
    match serde_json::to_value(params).map_err(|e| ToolError::internal(e.to_string()))? {
        Value::Object(map) => Ok(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => Err(ToolError::internal(format!(
            "query parameters must serialize to an object, got {}",
            other
        ))),
    }
}

/// Serialize a parameter struct into a request body.
pub fn body_from<T: Serialize>(params: &T) -> Result<Value, ToolError> {
    serde_json::to_value(params).map_err(|e| ToolError::internal(e.to_string()))
}

/// Wrap a handler outcome into a tool result envelope.
pub fn into_envelope(tool: &str, outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => success_result(text),
            Err(e) => error_result(tool, &format!("Failed to serialize response: {}", e)),
        },
        Err(e) => error_result(tool, &e.to_string()),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(tool: &str, message: &str) -> CallToolResult {
    warn!(tool, "{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
