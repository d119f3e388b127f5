//! Order tools.
//!
//! Listing, lookup, creation and the order state actions (ship, tag, hold).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Id, JsonPayload, SortDir, body_from, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Filters for `list_orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Number of orders per page (max 500)")]
    pub page_size: Option<u32>,
    #[schemars(description = "Sort orders by a specific field")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort direction")]
    pub sort_dir: Option<SortDir>,
    #[schemars(description = "Filter by order status")]
    pub order_status: Option<String>,
    #[schemars(description = "Filter by store ID")]
    pub store_id: Option<u64>,
    #[schemars(description = "Filter by creation date (start)")]
    pub create_date_start: Option<String>,
    #[schemars(description = "Filter by creation date (end)")]
    pub create_date_end: Option<String>,
    #[schemars(description = "Filter by modification date (start)")]
    pub modify_date_start: Option<String>,
    #[schemars(description = "Filter by modification date (end)")]
    pub modify_date_end: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdParams {
    #[schemars(description = "Order ID")]
    pub order_id: Id,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    #[schemars(description = "JSON string containing the order data")]
    pub order_data: JsonPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsShippedParams {
    #[schemars(description = "Order ID to mark as shipped")]
    pub order_id: Id,
    #[schemars(description = "Carrier code")]
    pub carrier_code: String,
    #[schemars(description = "Ship date (YYYY-MM-DD)")]
    pub ship_date: String,
    #[schemars(description = "Tracking number")]
    pub tracking_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderTagParams {
    #[schemars(description = "Order ID")]
    pub order_id: Id,
    #[schemars(description = "Tag ID")]
    pub tag_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldUntilParams {
    #[schemars(description = "Order ID to hold")]
    pub order_id: Id,
    #[schemars(description = "Date to hold until (YYYY-MM-DD)")]
    pub hold_until_date: String,
}

async fn list_orders(api: SharedApi, params: ListOrdersParams) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/orders").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn get_order(api: SharedApi, params: OrderIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/orders/{}", params.order_id)))
        .await?)
}

async fn create_order(api: SharedApi, params: CreateOrderParams) -> Result<Value, ToolError> {
    let body = params.order_data.into_value("orderData")?;
    Ok(api
        .request(ApiRequest::post("/orders/createorder").with_body(body))
        .await?)
}

async fn mark_order_as_shipped(
    api: SharedApi,
    params: MarkAsShippedParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/orders/markasshipped").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

async fn delete_order(api: SharedApi, params: OrderIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::delete(format!("/orders/{}", params.order_id)))
        .await?)
}

async fn add_tag_to_order(api: SharedApi, params: OrderTagParams) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/orders/addtag").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

async fn remove_tag_from_order(
    api: SharedApi,
    params: OrderTagParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/orders/removetag").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

async fn restore_order_from_hold(
    api: SharedApi,
    params: OrderIdParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/orders/restorefromhold").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

async fn hold_order_until(api: SharedApi, params: HoldUntilParams) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/orders/holduntil").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

/// Order tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_orders",
            "List orders with optional filtering parameters",
            list_orders,
        ),
        ToolDescriptor::new("get_order", "Get details for a specific order", get_order),
        ToolDescriptor::new(
            "create_order",
            "Create a new order in ShipStation",
            create_order,
        ),
        ToolDescriptor::new(
            "mark_order_as_shipped",
            "Mark an order as shipped",
            mark_order_as_shipped,
        ),
        ToolDescriptor::new(
            "delete_order",
            "Delete an order from ShipStation",
            delete_order,
        ),
        ToolDescriptor::new("add_tag_to_order", "Add a tag to an order", add_tag_to_order),
        ToolDescriptor::new(
            "remove_tag_from_order",
            "Remove a tag from an order",
            remove_tag_from_order,
        ),
        ToolDescriptor::new(
            "restore_order_from_hold",
            "Restore an order from on-hold status",
            restore_order_from_hold,
        ),
        ToolDescriptor::new(
            "hold_order_until",
            "Hold an order until a specified date",
            hold_order_until,
        ),
    ]
}
