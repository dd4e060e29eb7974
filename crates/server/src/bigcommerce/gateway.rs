//! HTTP request gateway for the platform API.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::credentials::StoreCredentials;

use super::GatewayError;

/// Request timeout for all platform calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Single HTTP boundary between tools and the platform API.
///
/// The credential slot starts empty and is filled by the credential resolver
/// tool. Each MCP session gets its own `Gateway`, so credentials never leak
/// between tenants. Requests made before resolution fail fast with
/// [`GatewayError::CredentialsNotResolved`].
pub struct Gateway {
    client: reqwest::Client,
    api_base: String,
    credentials: RwLock<Option<StoreCredentials>>,
}

impl Gateway {
    /// Create a gateway pointed at the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(api_base: impl Into<String>) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            credentials: RwLock::new(None),
        })
    }

    /// Install credentials for this session, replacing any previous ones.
    pub async fn install_credentials(&self, credentials: StoreCredentials) {
        *self.credentials.write().await = Some(credentials);
    }

    /// Whether credentials have been resolved for this session.
    pub async fn is_resolved(&self) -> bool {
        self.credentials.read().await.is_some()
    }

    /// Execute a GET request against a versioned resource path.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, GatewayError> {
        self.request(Method::GET, path, query, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Execute a request and parse the JSON response.
    ///
    /// `path` is a versioned resource path such as `/v3/catalog/products`.
    /// No retries: transport failures and error statuses surface immediately.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, GatewayError> {
        let (url, token) = {
            let guard = self.credentials.read().await;
            let credentials = guard.as_ref().ok_or(GatewayError::CredentialsNotResolved)?;
            (
                format!("{}/stores/{}{path}", self.api_base, credentials.store_hash),
                credentials.access_token.expose_secret().to_string(),
            )
        };

        let mut request = self
            .client
            .request(method, &url)
            .header("X-Auth-Token", token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Parse a successful response, or map an error status to [`GatewayError::Http`].
    async fn handle_response(response: reqwest::Response) -> Result<Value, GatewayError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        // Some v2 endpoints return an empty body on success.
        if body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Parse(format!("Failed to parse response: {e}")))
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}
