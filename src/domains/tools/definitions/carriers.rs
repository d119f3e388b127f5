//! Carrier tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{NoParams, query_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarrierCodeParams {
    #[schemars(description = "Carrier code (e.g., 'ups', 'fedex', 'usps')")]
    pub carrier_code: String,
}

async fn list_carriers(api: SharedApi, _params: NoParams) -> Result<Value, ToolError> {
    Ok(api.request(ApiRequest::get("/carriers")).await?)
}

async fn list_carrier_packages(
    api: SharedApi,
    params: CarrierCodeParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/carriers/listpackages").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

async fn list_carrier_services(
    api: SharedApi,
    params: CarrierCodeParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::get("/carriers/listservices").with_query(query_from(&params)?);
    Ok(api.request(request).await?)
}

/// Carrier tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_carriers",
            "List all carriers available to the account",
            list_carriers,
        ),
        ToolDescriptor::new(
            "list_carrier_packages",
            "List all packages available for a carrier",
            list_carrier_packages,
        ),
        ToolDescriptor::new(
            "list_carrier_services",
            "List all services available for a carrier",
            list_carrier_services,
        ),
    ]
}
