//! Product tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Id, JsonPayload, SortDir, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Filters for `list_products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Number of products per page (max 500)")]
    pub page_size: Option<u32>,
    #[schemars(description = "Sort products by a specific field")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort direction")]
    pub sort_dir: Option<SortDir>,
    #[schemars(description = "Filter by SKU")]
    pub sku: Option<String>,
    #[schemars(description = "Filter by product name")]
    pub name: Option<String>,
    #[schemars(description = "Filter by product category ID")]
    pub product_category_id: Option<u64>,
    #[schemars(description = "Include inactive products")]
    pub show_inactive: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdParams {
    #[schemars(description = "Product ID")]
    pub product_id: Id,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductParams {
    #[schemars(description = "JSON string containing the product data")]
    pub product_data: JsonPayload,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductParams {
    #[schemars(description = "Product ID to update")]
    pub product_id: Id,
    #[schemars(description = "JSON string containing the updated product data")]
    pub product_data: JsonPayload,
}

async fn list_products(api: SharedApi, params: ListProductsParams) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/products").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn get_product(api: SharedApi, params: ProductIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/products/{}", params.product_id)))
        .await?)
}

async fn create_product(api: SharedApi, params: CreateProductParams) -> Result<Value, ToolError> {
    let body = params.product_data.into_value("productData")?;
    Ok(api
        .request(ApiRequest::post("/products").with_body(body))
        .await?)
}

async fn update_product(api: SharedApi, params: UpdateProductParams) -> Result<Value, ToolError> {
    let body = params.product_data.into_value("productData")?;
    let path = format!("/products/{}", params.product_id);
    Ok(api.request(ApiRequest::put(path).with_body(body)).await?)
}

async fn delete_product(api: SharedApi, params: ProductIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::delete(format!("/products/{}", params.product_id)))
        .await?)
}

/// Product tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_products",
            "List products with optional filtering parameters",
            list_products,
        ),
        ToolDescriptor::new(
            "get_product",
            "Get details for a specific product",
            get_product,
        ),
        ToolDescriptor::new("create_product", "Create a new product", create_product),
        ToolDescriptor::new(
            "update_product",
            "Update an existing product",
            update_product,
        ),
        ToolDescriptor::new("delete_product", "Delete a product", delete_product),
    ]
}
