//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools` - one MCP tool per ShipStation endpoint
//! - `resources` - the API documentation resource

pub mod resources;
pub mod tools;
