//! Test doubles shared by the tool tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

use crate::api::{ApiError, ApiRequest, ApiResult, ShipStationApi};

/// API fake that records every request and answers with a canned response.
pub struct RecordingApi {
    calls: Mutex<Vec<ApiRequest>>,
    response: Result<Value, (u16, Value)>,
}

impl RecordingApi {
    /// Answer every request with `body` and a 2xx status.
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(body),
        })
    }

    /// Answer every request with a remote error.
    pub fn failing(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Err((status, body)),
        })
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShipStationApi for RecordingApi {
    async fn request(&self, request: ApiRequest) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(request);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err((status, body)) => Err(ApiError::remote(*status, body.clone())),
        }
    }
}

/// Text of the first content item of a tool result.
pub fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
