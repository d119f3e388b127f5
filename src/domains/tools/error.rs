//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur during tool operations.
///
/// `NotFound` and `InvalidArguments` are raised before a handler runs and are
/// reported as protocol errors. Every other variant is turned into an
/// `isError: true` tool result by the handler boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A JSON payload supplied as a string could not be parsed.
    #[error("Invalid JSON in '{field}': {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The ShipStation API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "parse" error for a payload field.
    pub fn parse(field: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { field, source }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_message_is_transparent() {
        let err = ToolError::from(ApiError::remote(404, json!({"message": "Not Found"})));
        assert_eq!(
            err.to_string(),
            r#"ShipStation API Error (404): {"message":"Not Found"}"#
        );
    }

    #[test]
    fn test_parse_error_names_field() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ToolError::parse("orderData", source);
        assert!(err.to_string().starts_with("Invalid JSON in 'orderData'"));
    }

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let mcp: McpError = ToolError::invalid_arguments("missing field `orderId`").into();
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
