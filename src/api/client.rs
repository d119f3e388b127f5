//! `reqwest`-backed ShipStation API client.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::{ApiError, ApiResult};
use super::request::{ApiRequest, HttpMethod, QueryParams};
use super::ShipStationApi;
use crate::core::config::ApiConfig;

/// Default ShipStation API host.
pub const DEFAULT_BASE_URL: &str = "https://ssapi.shipstation.com";

/// HTTP client for the ShipStation REST API.
///
/// Holds the base URL and the Basic-auth credential pair; both are fixed at
/// construction. The inner `reqwest::Client` pools connections and is safe
/// to share across concurrent tool calls.
#[derive(Clone)]
pub struct ShipStationClient {
    http: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl std::fmt::Debug for ShipStationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipStationClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

impl ShipStationClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ApiError::invalid_url(&config.base_url, e))?;

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            api_secret: config.api_secret.clone().unwrap_or_default(),
        })
    }

    /// The base URL every request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).map_err(|e| ApiError::invalid_url(url, e))
    }
}

#[async_trait]
impl ShipStationApi for ShipStationClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn request(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.endpoint(&request.path)?;

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match request.method {
            HttpMethod::Get => {
                if let Some(query) = &request.query {
                    builder = builder.query(&query_pairs(query));
                }
            }
            _ => {
                if let Some(body) = &request.body {
                    builder = builder.json(body);
                }
            }
        }

        debug!("Sending ShipStation request");
        let response = builder.send().await.map_err(ApiError::Network)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::Network)?;
        if !status.is_success() {
            let body = decode_error_body(&text);
            error!(
                status = status.as_u16(),
                "ShipStation API Error: {}",
                remote_message(&body, status.canonical_reason())
            );
            return Err(ApiError::remote(status.as_u16(), body));
        }

        Ok(decode_body(&text))
    }
}

/// Flatten scalar query values into string pairs. Nulls are skipped.
fn query_pairs(query: &QueryParams) -> Vec<(&str, String)> {
    query
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key.as_str(), s.clone())),
            other => Some((key.as_str(), other.to_string())),
        })
        .collect()
}

/// Decode a response body: JSON when possible, raw text otherwise, `null` when empty.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Decode an error body. Unlike success bodies, an empty error body stays an
/// empty string so the error message reads `(<status>): ""`.
fn decode_error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::String(text.to_string());
    }
    decode_body(text)
}

/// Pick the most useful message out of an error body for logging.
fn remote_message(body: &Value, reason: Option<&str>) -> String {
    match body {
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => body.to_string(),
        },
        Value::String(s) if !s.is_empty() => s.clone(),
        _ => reason.unwrap_or("unknown error").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some("k3y-value".to_string()),
            api_secret: Some("s3cret-value".to_string()),
        }
    }

    #[tokio::test]
    async fn test_get_sends_query_and_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders"))
            .and(query_param("page", "2"))
            .and(query_param("sortDir", "ASC"))
            .and(basic_auth("k3y-value", "s3cret-value"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&config_for(&server.uri())).unwrap();
        let mut query = QueryParams::new();
        query.insert("page".to_string(), json!(2));
        query.insert("sortDir".to_string(), json!("ASC"));

        let result = client
            .request(
                ApiRequest::get("/orders")
                    .with_query(query)
                    .with_body(json!({"ignored": true})),
            )
            .await
            .unwrap();

        assert_eq!(result, json!({"orders": []}));
        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_body_and_drops_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders/addtag"))
            .and(body_json(json!({"orderId": 1, "tagId": 7})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&config_for(&server.uri())).unwrap();
        let mut query = QueryParams::new();
        query.insert("page".to_string(), json!(1));

        let result = client
            .request(
                ApiRequest::post("/orders/addtag")
                    .with_body(json!({"orderId": 1, "tagId": 7}))
                    .with_query(query),
            )
            .await
            .unwrap();

        assert_eq!(result, json!({"success": true}));
        let received = server.received_requests().await.unwrap();
        assert!(received[0].url.query().is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&config_for(&server.uri())).unwrap();
        let err = client
            .request(ApiRequest::get("/orders/42"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"message":"Not Found"}"#));
    }

    #[tokio::test]
    async fn test_empty_error_body_is_empty_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&config_for(&server.uri())).unwrap();
        let err = client
            .request(ApiRequest::get("/orders/404"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), r#"ShipStation API Error (404): """#);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/webhooks/9"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = ShipStationClient::new(&config_for(&server.uri())).unwrap();
        let result = client
            .request(ApiRequest::delete("/webhooks/9"))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = ShipStationClient::new(&config_for("http://127.0.0.1:1")).unwrap();
        let err = client
            .request(ApiRequest::get("/carriers"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.to_string().starts_with("Network error"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ShipStationClient::new(&config_for("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ShipStationClient::new(&config_for("https://example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(
            client.endpoint("/orders").unwrap().as_str(),
            "https://example.com/orders"
        );
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let client = ShipStationClient::new(&config_for("https://example.com")).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("k3y-value"));
        assert!(!debug.contains("s3cret-value"));
        assert!(debug.contains("api_secret: \"[REDACTED]\""));
    }

    #[test]
    fn test_query_pairs_stringify_scalars() {
        let mut query = QueryParams::new();
        query.insert("showInactive".to_string(), json!(true));
        query.insert("storeId".to_string(), json!(12));
        query.insert("name".to_string(), json!("Widget"));
        query.insert("skip".to_string(), Value::Null);

        let pairs = query_pairs(&query);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("showInactive", "true".to_string())));
        assert!(pairs.contains(&("storeId", "12".to_string())));
        assert!(pairs.contains(&("name", "Widget".to_string())));
    }

    #[test]
    fn test_decode_body_variants() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(decode_body("plain text"), json!("plain text"));
        assert_eq!(decode_error_body(""), json!(""));
        assert_eq!(decode_error_body(r#"{"a":1}"#), json!({"a": 1}));
    }

    #[test]
    fn test_remote_message_prefers_message_field() {
        assert_eq!(
            remote_message(&json!({"message": "Unauthorized"}), Some("Unauthorized")),
            "Unauthorized"
        );
        assert_eq!(remote_message(&Value::Null, Some("Not Found")), "Not Found");
        assert_eq!(remote_message(&json!("oops"), None), "oops");
    }
}
