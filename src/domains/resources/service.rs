//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::definitions::docs::{self, SECTION_URI_PREFIX};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registered resources keyed by URI.
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Content computed at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// API documentation, optionally narrowed to one section.
    Documentation(Option<String>),
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceService {
    /// Create a new ResourceService holding every registered resource.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: BTreeMap::new(),
            templates: get_all_resource_templates(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Registered URIs are served directly. `shipstation://docs/{section}`
    /// is expanded from the documentation template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        debug!(uri, "Reading resource");

        let content = match self.resources.get(uri) {
            Some(entry) => entry.content.clone(),
            None => Self::match_template(uri)?,
        };

        let contents = match content {
            ResourceContent::Dynamic(dynamic_type) => {
                Self::resolve_dynamic_content(uri, dynamic_type)
            }
        };

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    fn match_template(uri: &str) -> Result<ResourceContent, ResourceError> {
        let section = uri
            .strip_prefix(SECTION_URI_PREFIX)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        if section.is_empty() || section.contains('/') {
            return Err(ResourceError::invalid_uri(uri));
        }

        Ok(ResourceContent::Dynamic(DynamicResourceType::Documentation(
            Some(section.to_string()),
        )))
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(uri: &str, dynamic_type: DynamicResourceType) -> ResourceContents {
        match dynamic_type {
            DynamicResourceType::Documentation(section) => {
                ResourceContents::text(docs::render(section.as_deref()), uri)
            }
        }
    }
}
