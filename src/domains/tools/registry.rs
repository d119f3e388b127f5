//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The ordered list of every tool descriptor
//! - Dispatch of tool calls by exact name
//! - Tool metadata for listing

use std::collections::HashSet;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::all_descriptors;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use crate::api::SharedApi;

/// Tool registry - owns the descriptors and the shared API client.
pub struct ToolRegistry {
    api: SharedApi,
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a registry holding every ShipStation tool.
    pub fn new(api: SharedApi) -> Self {
        let tools = all_descriptors();
        debug_assert!(
            has_unique_names(&tools),
            "tool names must be unique across the registry"
        );
        Self { api, tools }
    }

    /// The API client handed to every handler.
    pub fn api(&self) -> SharedApi {
        self.api.clone()
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// Look up a descriptor by exact name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    /// Dispatch a tool call to the matching handler.
    ///
    /// Fails only for unknown tools and arguments that do not match the
    /// tool's schema; every other failure is an `isError` result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        match self.get(name) {
            Some(tool) => tool.invoke(self.api.clone(), arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

fn has_unique_names(tools: &[ToolDescriptor]) -> bool {
    let mut seen = HashSet::new();
    tools.iter().all(|t| seen.insert(t.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpMethod, ShipStationClient};
    use crate::core::config::ApiConfig;
    use crate::domains::tools::testing::{RecordingApi, text_of};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    /// Minimal valid arguments and the expected request for every tool.
    fn expected_calls() -> Vec<(&'static str, Value, HttpMethod, &'static str)> {
        use HttpMethod::*;
        vec![
            ("list_orders", json!({}), Get, "/orders"),
            ("get_order", json!({"orderId": 1}), Get, "/orders/1"),
            ("create_order", json!({"orderData": "{}"}), Post, "/orders/createorder"),
            (
                "mark_order_as_shipped",
                json!({"orderId": 1, "carrierCode": "ups", "shipDate": "2024-01-01", "trackingNumber": "T"}),
                Post,
                "/orders/markasshipped",
            ),
            ("delete_order", json!({"orderId": 2}), Delete, "/orders/2"),
            ("add_tag_to_order", json!({"orderId": 1, "tagId": 2}), Post, "/orders/addtag"),
            ("remove_tag_from_order", json!({"orderId": 1, "tagId": 2}), Post, "/orders/removetag"),
            ("restore_order_from_hold", json!({"orderId": 1}), Post, "/orders/restorefromhold"),
            (
                "hold_order_until",
                json!({"orderId": 1, "holdUntilDate": "2024-05-01"}),
                Post,
                "/orders/holduntil",
            ),
            ("list_shipments", json!({}), Get, "/shipments"),
            ("get_shipment", json!({"shipmentId": 3}), Get, "/shipments/3"),
            ("create_label", json!({"labelData": "{}"}), Post, "/shipments/createlabel"),
            ("void_label", json!({"shipmentId": 3}), Post, "/shipments/voidlabel"),
            ("list_carriers", json!({}), Get, "/carriers"),
            ("list_carrier_packages", json!({"carrierCode": "ups"}), Get, "/carriers/listpackages"),
            ("list_carrier_services", json!({"carrierCode": "ups"}), Get, "/carriers/listservices"),
            ("list_warehouses", json!({}), Get, "/warehouses"),
            ("get_warehouse", json!({"warehouseId": 4}), Get, "/warehouses/4"),
            ("create_warehouse", json!({"warehouseData": "{}"}), Post, "/warehouses"),
            (
                "update_warehouse",
                json!({"warehouseId": 4, "warehouseData": "{}"}),
                Put,
                "/warehouses/4",
            ),
            ("delete_warehouse", json!({"warehouseId": 4}), Delete, "/warehouses/4"),
            ("list_products", json!({}), Get, "/products"),
            ("get_product", json!({"productId": 5}), Get, "/products/5"),
            ("create_product", json!({"productData": "{}"}), Post, "/products"),
            (
                "update_product",
                json!({"productId": 5, "productData": "{}"}),
                Put,
                "/products/5",
            ),
            ("delete_product", json!({"productId": 5}), Delete, "/products/5"),
            ("list_customers", json!({}), Get, "/customers"),
            ("get_customer", json!({"customerId": 6}), Get, "/customers/6"),
            ("list_stores", json!({}), Get, "/stores"),
            ("get_store", json!({"storeId": 7}), Get, "/stores/7"),
            ("list_marketplaces", json!({}), Get, "/stores/marketplaces"),
            ("refresh_store", json!({"storeId": 7}), Post, "/stores/refreshstore"),
            ("deactivate_store", json!({"storeId": 7}), Post, "/stores/deactivate"),
            ("reactivate_store", json!({"storeId": 7}), Post, "/stores/reactivate"),
            ("list_webhooks", json!({}), Get, "/webhooks"),
            (
                "subscribe_to_webhook",
                json!({"targetUrl": "https://example.com/hook", "event": "ORDER_NOTIFY"}),
                Post,
                "/webhooks/subscribe",
            ),
            ("unsubscribe_from_webhook", json!({"webhookId": 8}), Delete, "/webhooks/8"),
            ("list_fulfillments", json!({}), Get, "/fulfillments"),
            (
                "create_fulfillment_order",
                json!({"orderData": "{}"}),
                Post,
                "/fulfillments/createorder",
            ),
        ]
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let names = registry.tool_names();
        assert_eq!(names.len(), 39);
        assert_eq!(names.first(), Some(&"list_orders"));
        assert_eq!(names.last(), Some(&"create_fulfillment_order"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_expected_calls_cover_every_tool() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let covered: HashSet<_> = expected_calls().into_iter().map(|(n, ..)| n).collect();
        let registered: HashSet<_> = registry.tool_names().into_iter().collect();
        assert_eq!(covered, registered);
    }

    #[tokio::test]
    async fn test_each_tool_makes_exactly_one_documented_call() {
        for (name, arguments, expected_method, expected_path) in expected_calls() {
            let api = RecordingApi::ok(json!({"ok": true}));
            let registry = ToolRegistry::new(api.clone());

            let result = registry.call_tool(name, args(arguments)).await.unwrap();
            assert_eq!(result.is_error, Some(false), "{} returned an error", name);

            let calls = api.calls();
            assert_eq!(calls.len(), 1, "{} made {} calls", name, calls.len());
            assert_eq!(calls[0].method, expected_method, "{} method", name);
            assert_eq!(calls[0].path, expected_path, "{} path", name);
        }
    }

    #[tokio::test]
    async fn test_malformed_payloads_make_no_calls() {
        for (name, arguments) in [
            ("create_order", json!({"orderData": "{"})),
            ("create_label", json!({"labelData": "nope"})),
            ("create_warehouse", json!({"warehouseData": "[1,"})),
            ("update_warehouse", json!({"warehouseId": 1, "warehouseData": "{a:1}"})),
            ("create_product", json!({"productData": ""})),
            ("update_product", json!({"productId": 1, "productData": "}"})),
            ("create_fulfillment_order", json!({"orderData": "{'x': 1}"})),
        ] {
            let api = RecordingApi::ok(json!({}));
            let registry = ToolRegistry::new(api.clone());

            let result = registry.call_tool(name, args(arguments)).await.unwrap();
            assert_eq!(result.is_error, Some(true), "{} should fail", name);
            assert!(text_of(&result).starts_with("Invalid JSON in"), "{}", name);
            assert!(api.calls().is_empty(), "{} called the API", name);
        }
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_validation_error() {
        let api = RecordingApi::ok(json!({}));
        let registry = ToolRegistry::new(api.clone());

        let err = registry.call_tool("get_order", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = ToolRegistry::new(RecordingApi::ok(json!({})));
        let err = registry.call_tool("unknown", JsonObject::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remote_not_found_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&ApiConfig::with_base_url(&server.uri())).unwrap();
        let registry = ToolRegistry::new(Arc::new(client));

        let result = registry
            .call_tool("get_order", args(json!({"orderId": 404})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("404"));
        assert!(text.contains(r#"{"message":"Not Found"}"#));
    }

    #[tokio::test]
    async fn test_list_orders_success_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&ApiConfig::with_base_url(&server.uri())).unwrap();
        let registry = ToolRegistry::new(Arc::new(client));

        let result = registry
            .call_tool("list_orders", JsonObject::new())
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            serde_json::to_string_pretty(&json!({"orders": []})).unwrap()
        );
        let received = server.received_requests().await.unwrap();
        assert!(received[0].url.query().is_none());
    }
}
