//! Webhook subscription tools.

use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{Id, NoParams, body_from};
use crate::api::{ApiRequest, SharedApi};
use crate::domains::tools::{ToolDescriptor, ToolError};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeParams {
    #[serde(deserialize_with = "absolute_url")]
    #[schemars(with = "String")]
    #[schemars(url)]
    #[schemars(description = "URL to receive webhook notifications")]
    pub target_url: String,

    #[schemars(description = "Event to subscribe to (e.g., ORDER_NOTIFY, SHIP_NOTIFY)")]
    pub event: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Store ID to filter events (optional)")]
    pub store_id: Option<Id>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookIdParams {
    #[schemars(description = "Webhook ID to unsubscribe from")]
    pub webhook_id: Id,
}

/// Accept only strings that parse as absolute URLs.
fn absolute_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Url::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid targetUrl: {}", e)))?;
    Ok(raw)
}

async fn list_webhooks(api: SharedApi, _params: NoParams) -> Result<Value, ToolError> {
    Ok(api.request(ApiRequest::get("/webhooks")).await?)
}

async fn subscribe_to_webhook(api: SharedApi, params: SubscribeParams) -> Result<Value, ToolError> {
    let request = ApiRequest::post("/webhooks/subscribe").with_body(body_from(&params)?);
    Ok(api.request(request).await?)
}

async fn unsubscribe_from_webhook(
    api: SharedApi,
    params: WebhookIdParams,
) -> Result<Value, ToolError> {
    Ok(api
        .request(ApiRequest::delete(format!("/webhooks/{}", params.webhook_id)))
        .await?)
}

/// Webhook tool descriptors, in registration order.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_webhooks",
            "List all webhooks for the account",
            list_webhooks,
        ),
        ToolDescriptor::new(
            "subscribe_to_webhook",
            "Subscribe to a webhook",
            subscribe_to_webhook,
        ),
        ToolDescriptor::new(
            "unsubscribe_from_webhook",
            "Unsubscribe from a webhook",
            unsubscribe_from_webhook,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_subscribe_omits_absent_store_id() {
        let api = RecordingApi::ok(json!({"id": 1}));
        let params: SubscribeParams = serde_json::from_value(json!({
            "targetUrl": "https://example.com/hooks",
            "event": "ORDER_NOTIFY"
        }))
        .unwrap();

        subscribe_to_webhook(api.clone(), params).await.unwrap();

        assert_eq!(
            api.calls()[0].body,
            Some(json!({"targetUrl": "https://example.com/hooks", "event": "ORDER_NOTIFY"}))
        );
    }

    #[tokio::test]
    async fn test_subscribe_includes_store_id() {
        let api = RecordingApi::ok(json!({"id": 1}));
        let params: SubscribeParams = serde_json::from_value(json!({
            "targetUrl": "https://example.com/hooks",
            "event": "SHIP_NOTIFY",
            "storeId": 12
        }))
        .unwrap();

        subscribe_to_webhook(api.clone(), params).await.unwrap();

        assert_eq!(api.calls()[0].body.as_ref().unwrap()["storeId"], json!(12));
    }

    #[test]
    fn test_relative_target_url_rejected() {
        let err = serde_json::from_value::<SubscribeParams>(json!({
            "targetUrl": "/hooks",
            "event": "ORDER_NOTIFY"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid targetUrl"));
    }
}
