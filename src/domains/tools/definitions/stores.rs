//! Store and marketplace tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Id, NoParams, body_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreIdParams {
    #[schemars(description = "Store ID")]
    pub store_id: Id,
}

async fn list_stores(api: SharedApi, _params: NoParams) -> Result<Value, ToolError> {
    Ok(api.request(ApiRequest::get("/stores")).await?)
}

async fn get_store(api: SharedApi, params: StoreIdParams) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::get(format!("/stores/{}", params.store_id)))
        .await?)
}

async fn list_marketplaces(api: SharedApi, _params: NoParams) -> Result<Value, ToolError> {
    Ok(api.request(ApiRequest::get("/stores/marketplaces")).await?)
}

async fn refresh_store(api: SharedApi, params: StoreIdParams) -> Result<Value, ToolError> {
    store_action(api, "/stores/refreshstore", &params).await
}

async fn deactivate_store(api: SharedApi, params: StoreIdParams) -> Result<Value, ToolError> {
    store_action(api, "/stores/deactivate", &params).await
}

async fn reactivate_store(api: SharedApi, params: StoreIdParams) -> Result<Value, ToolError> {
    store_action(api, "/stores/reactivate", &params).await
}

/// POST `{storeId}` to a store action endpoint.
async fn store_action(
    api: SharedApi,
    path: &'static str,
    params: &StoreIdParams,
) -> Result<Value, ToolError> {
    let request = ApiRequest::post(path).with_body(body_from(params)?);
    Ok(api.request(request).await?)
}

/// Store tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_stores",
            "List all stores connected to the account",
            list_stores,
        ),
        ToolDescriptor::new("get_store", "Get details for a specific store", get_store),
        ToolDescriptor::new(
            "list_marketplaces",
            "List all available marketplaces",
            list_marketplaces,
        ),
        ToolDescriptor::new("refresh_store", "Refresh store data", refresh_store),
        ToolDescriptor::new("deactivate_store", "Deactivate a store", deactivate_store),
        ToolDescriptor::new("reactivate_store", "Reactivate a store", reactivate_store),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_store_actions_post_store_id() {
        for (path, action) in [
            ("/stores/refreshstore", "refresh"),
            ("/stores/deactivate", "deactivate"),
            ("/stores/reactivate", "reactivate"),
        ] {
            let api = RecordingApi::ok(json!({"success": "true"}));
            let params = StoreIdParams {
                store_id: Id::new(31).unwrap(),
            };
            match action {
                "refresh" => refresh_store(api.clone(), params).await.unwrap(),
                "deactivate" => deactivate_store(api.clone(), params).await.unwrap(),
                _ => reactivate_store(api.clone(), params).await.unwrap(),
            };

            let call = &api.calls()[0];
            assert_eq!(call.method, HttpMethod::Post);
            assert_eq!(call.path, path);
            assert_eq!(call.body, Some(json!({"storeId": 31})));
        }
    }
}
