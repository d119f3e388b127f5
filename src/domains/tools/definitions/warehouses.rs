//! Warehouse tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{Id, JsonPayload, NoParams};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseIdParams {
    #[schemars(description = "Warehouse ID")]
    pub warehouse_id: Id,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseParams {
    #[schemars(description = "JSON string containing the warehouse data")]
    pub warehouse_data: JsonPayload,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWarehouseParams {
    #[schemars(description = "Warehouse ID to update")]
    pub warehouse_id: Id,
    #[schemars(description = "JSON string containing the updated warehouse data")]
    pub warehouse_data: JsonPayload,
}

async fn list_warehouses(api: SharedApi, _params: NoParams) -> Result<Value, ToolError> {
    Ok(api.request(ApiRequest::get("/warehouses")).await?)
}

async fn get_warehouse(api: SharedApi, params: WarehouseIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/warehouses/{}", params.warehouse_id)))
        .await?)
}

async fn create_warehouse(
    api: SharedApi,
    params: CreateWarehouseParams,
) -> Result<Value, ToolError> {
    let body = params.warehouse_data.into_value("warehouseData")?;
    Ok(api
        .request(ApiRequest::post("/warehouses").with_body(body))
        .await?)
}

async fn update_warehouse(
    api: SharedApi,
    params: UpdateWarehouseParams,
) -> Result<Value, ToolError> {
    let body = params.warehouse_data.into_value("warehouseData")?;
    let path = format!("/warehouses/{}", params.warehouse_id);
    Ok(api.request(ApiRequest::put(path).with_body(body)).await?)
}

async fn delete_warehouse(api: SharedApi, params: WarehouseIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::delete(format!(
            "/warehouses/{}",
            params.warehouse_id
        )))
        .await?)
}

/// Warehouse tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new("list_warehouses", "List all warehouses", list_warehouses),
        ToolDescriptor::new(
            "get_warehouse",
            "Get details for a specific warehouse",
            get_warehouse,
        ),
        ToolDescriptor::new(
            "create_warehouse",
            "Create a new warehouse",
            create_warehouse,
        ),
        ToolDescriptor::new(
            "update_warehouse",
            "Update an existing warehouse",
            update_warehouse,
        ),
        ToolDescriptor::new("delete_warehouse", "Delete a warehouse", delete_warehouse),
    ]
}
