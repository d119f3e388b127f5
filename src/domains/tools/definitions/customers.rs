//! Customer tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Id, SortDir, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Filters for `list_customers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Number of customers per page (max 500)")]
    pub page_size: Option<u32>,
    #[schemars(description = "Sort customers by a specific field")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort direction")]
    pub sort_dir: Option<SortDir>,
    #[schemars(description = "Filter by customer name")]
    pub name: Option<String>,
    #[schemars(description = "Filter by state code")]
    pub state_code: Option<String>,
    #[schemars(description = "Filter by country code")]
    pub country_code: Option<String>,
    #[schemars(description = "Filter by marketplace ID")]
    pub marketplace_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdParams {
    #[schemars(description = "Customer ID to retrieve")]
    pub customer_id: Id,
}

async fn list_customers(api: SharedApi, params: ListCustomersParams) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/customers").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn get_customer(api: SharedApi, params: CustomerIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/customers/{}", params.customer_id)))
        .await?)
}

/// Customer tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_customers",
            "List customers with optional filtering parameters",
            list_customers,
        ),
        ToolDescriptor::new(
            "get_customer",
            "Get details for a specific customer",
            get_customer,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_customers_location_filters() {
        let api = RecordingApi::ok(json!({"customers": []}));
        let params: ListCustomersParams = serde_json::from_value(json!({
            "stateCode": "TX",
            "countryCode": "US",
            "sortDir": "ASC"
        }))
        .unwrap();

        list_customers(api.clone(), params).await.unwrap();

        let query = api.calls()[0].query.clone().unwrap();
        assert_eq!(query["stateCode"], json!("TX"));
        assert_eq!(query["countryCode"], json!("US"));
        assert_eq!(query["sortDir"], json!("ASC"));
        assert!(!query.contains_key("marketplaceId"));
    }

    #[test]
    fn test_invalid_sort_dir_rejected() {
        assert!(
            serde_json::from_value::<ListCustomersParams>(json!({"sortDir": "UP"})).is_err()
        );
    }
}
