//! Tools domain module.
//!
//! Every ShipStation endpoint is exposed as one MCP tool. Tools are plain
//! data ([`ToolDescriptor`]) collected into a single ordered
//! [`ToolRegistry`]; each handler validates its input, makes exactly one
//! API call and returns a tool result envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool groups, one file per endpoint family
//! - `descriptor.rs` - The descriptor record and handler erasure
//! - `registry.rs` - Ordered registry and dispatch by name
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and an async handler to the matching group file
//! 2. Append a `ToolDescriptor::new(...)` entry to that group's `descriptors()`
//!
//! The registry, router and HTTP transport pick it up automatically.

pub mod definitions;
mod descriptor;
mod error;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use descriptor::ToolDescriptor;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
