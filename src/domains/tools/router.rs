//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every descriptor in the [`ToolRegistry`] becomes one route; the router is
//! used by the rmcp `ServerHandler` for STDIO transport.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(descriptor.create_route(registry.api()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let tools = router.list_all();
        assert_eq!(tools.len(), 39);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_orders"));
        assert!(names.contains(&"create_label"));
        assert!(names.contains(&"list_carrier_services"));
        assert!(names.contains(&"update_warehouse"));
        assert!(names.contains(&"subscribe_to_webhook"));
        assert!(names.contains(&"create_fulfillment_order"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_router_schemas_carry_properties() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "get_order")
            .unwrap();

        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("orderId").is_some());
    }
}
