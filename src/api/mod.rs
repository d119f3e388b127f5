//! ShipStation API client.
//!
//! All tools reach the remote API through the [`ShipStationApi`] trait.
//! [`ShipStationClient`] is the production implementation backed by `reqwest`;
//! it is built once at startup and shared as [`SharedApi`].
//!
//! Every call is a single HTTP round trip. Nothing is retried or cached.

mod client;
mod error;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use client::{DEFAULT_BASE_URL, ShipStationClient};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, HttpMethod, QueryParams};

/// Uniform request interface over the ShipStation API.
#[async_trait]
pub trait ShipStationApi: Send + Sync {
    /// Perform one request and return the decoded response body.
    async fn request(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// Shared handle to the API client, injected into every tool handler.
pub type SharedApi = Arc<dyn ShipStationApi>;
