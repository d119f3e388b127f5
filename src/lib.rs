//! ShipStation MCP Server Library
//!
//! Exposes the ShipStation REST API to MCP clients: one tool per endpoint
//! plus a documentation resource describing each endpoint group.
//!
//! # Architecture
//!
//! - **api**: The ShipStation HTTP client and its injectable trait
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One MCP tool per ShipStation endpoint
//!   - **resources**: The API documentation resource
//!
//! # Example
//!
//! ```rust,no_run
//! use shipstation_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use api::{SharedApi, ShipStationApi, ShipStationClient};
pub use core::{Config, Error, McpServer, Result};
