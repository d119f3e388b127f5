//! Shipment and label tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Id, JsonPayload, SortDir, body_from, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Filters for `list_shipments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListShipmentsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Number of shipments per page (max 500)")]
    pub page_size: Option<u32>,
    #[schemars(description = "Sort shipments by a specific field")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort direction")]
    pub sort_dir: Option<SortDir>,
    #[schemars(description = "Filter by recipient name")]
    pub recipient_name: Option<String>,
    #[schemars(description = "Filter by creation date (start)")]
    pub create_date_start: Option<String>,
    #[schemars(description = "Filter by creation date (end)")]
    pub create_date_end: Option<String>,
    #[schemars(description = "Filter by ship date (start)")]
    pub ship_date_start: Option<String>,
    #[schemars(description = "Filter by ship date (end)")]
    pub ship_date_end: Option<String>,
    #[schemars(description = "Filter by order ID")]
    pub order_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentIdParams {
    #[schemars(description = "Shipment ID")]
    pub shipment_id: Id,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelParams {
    #[schemars(description = "JSON string containing the label data")]
    pub label_data: JsonPayload,
}

async fn list_shipments(api: SharedApi, params: ListShipmentsParams) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/shipments").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn get_shipment(api: SharedApi, params: ShipmentIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/shipments/{}", params.shipment_id)))
        .await?)
}

async fn create_label(api: SharedApi, params: CreateLabelParams) -> Result<Value, ToolError> {
    let body = params.label_data.into_value("labelData")?;
    Ok(api
        .request(ApiRequest::post("/shipments/createlabel").with_body(body))
        .await?)
}

async fn void_label(api: SharedApi, params: ShipmentIdParams) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/shipments/voidlabel").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

/// Shipment tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_shipments",
            "List shipments with optional filtering parameters",
            list_shipments,
        ),
        ToolDescriptor::new(
            "get_shipment",
            "Get details for a specific shipment",
            get_shipment,
        ),
        ToolDescriptor::new("create_label", "Create a shipping label", create_label),
        ToolDescriptor::new("void_label", "Void a shipping label", void_label),
    ]
}
