//! Fulfillment tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{JsonPayload, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Filters for `list_fulfillments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFulfillmentsParams {
    #[schemars(description = "Filter by fulfillment provider ID")]
    pub fulfillment_provider_id: Option<u64>,
    #[schemars(description = "Filter by order ID")]
    pub order_id: Option<u64>,
    #[schemars(description = "Filter by status")]
    pub status: Option<String>,
    #[schemars(description = "Filter by creation date (start)")]
    pub create_date_start: Option<String>,
    #[schemars(description = "Filter by creation date (end)")]
    pub create_date_end: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFulfillmentOrderParams {
    #[schemars(description = "JSON string containing the fulfillment order data")]
    pub order_data: JsonPayload,
}

async fn list_fulfillments(
    api: SharedApi,
    params: ListFulfillmentsParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/fulfillments").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn create_fulfillment_order(
    api: SharedApi,
    params: CreateFulfillmentOrderParams,
) -> Result<Value, ToolError> {
    let body = params.order_data.into_value("orderData")?;
    Ok(api
        .request(ApiRequest::post("/fulfillments/createorder").with_body(body))
        .await?)
}

/// Fulfillment tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_fulfillments",
            "List fulfillments with optional filtering parameters",
            list_fulfillments,
        ),
        ToolDescriptor::new(
            "create_fulfillment_order",
            "Create a fulfillment order",
            create_fulfillment_order,
        ),
    ]
}
