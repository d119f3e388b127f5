//! Tool descriptors.
//!
//! A [`ToolDescriptor`] is a plain data record: name, description, the JSON
//! schema of its parameters and a type-erased handler. Descriptors are built
//! once at startup and never change afterwards.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use super::definitions::common::into_envelope;
use super::error::ToolError;
use crate::api::SharedApi;

type BoxedHandler = Arc<
    dyn Fn(SharedApi, JsonObject) -> BoxFuture<'static, Result<CallToolResult, ToolError>>
        + Send
        + Sync,
>;

/// Static description of one tool and its handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
    handler: BoxedHandler,
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl ToolDescriptor {
    /// Build a descriptor from a typed handler.
    ///
    /// The parameter schema is derived from `P`. Arguments are deserialized
    /// into `P` before the handler runs; a mismatch is reported as
    /// [`ToolError::InvalidArguments`]. Whatever the handler returns is
    /// wrapped into a tool result envelope.
    pub fn new<P, F, Fut>(name: &'static str, description: &'static str, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(SharedApi, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        let boxed: BoxedHandler = Arc::new(move |api: SharedApi, arguments: JsonObject| {
            let handler = handler.clone();
            async move {
                let params: P = serde_json::from_value(Value::Object(arguments))
                    .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
                let outcome = (handler.as_ref())(api, params).await;
                Ok(into_envelope(name, outcome))
            }
            .boxed()
        });

        Self {
            name,
            description,
            input_schema: cached_schema_for_type::<P>(),
            handler: boxed,
        }
    }

    /// Tool name as registered in MCP.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tool description shown to clients.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// JSON schema of the tool parameters.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        self.input_schema.clone()
    }

    /// Validate the arguments and run the handler.
    ///
    /// Returns `Err` only when the arguments do not match the schema.
    pub async fn invoke(
        &self,
        api: SharedApi,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        info!(tool = self.name, "Tool called");
        (self.handler)(api, arguments).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(&self, api: SharedApi) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let descriptor = self.clone();
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let descriptor = descriptor.clone();
            let api = api.clone();
            async move {
                descriptor
                    .invoke(api, args)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}
