//! Transport layer: one authenticated HTTP exchange per call.

use std::collections::HashMap;

use crate::clients::errors::ApiError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends prepared requests to `{origin}/admin/api/{version}/{path}`.
///
/// The origin, API version and credentials are fixed at construction.
/// Cloning is cheap and clones share reqwest's connection pool.
///
/// No retries are attempted: a 429 or 5xx is returned to the caller as an
/// [`ApiError`] carrying `Retry-After` when the server sent it.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ApiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Services v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.api_origin(),
            base_path: format!("/admin/api/{}", config.api_version()),
            default_headers,
        })
    }

    /// Returns the request origin, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the versioned base path, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL `request` is sent to, without query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, request.path)
    }

    /// Sends `request` and returns the raw response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if no response was received
    /// - a status-classified variant (see [`ApiError::from_response`]) for
    ///   any non-2xx response
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url_for(request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Shopify REST request");

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        let response = HttpResponse::new(code, headers, text);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received Shopify REST response"
        );

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        if let Some(limit) = response.api_call_limit {
            if limit.is_near_capacity() {
                tracing::debug!(
                    request_count = limit.request_count,
                    bucket_size = limit.bucket_size,
                    "Shopify API call limit nearly exhausted"
                );
            }
        }

        if response.is_ok() {
            return Ok(response);
        }

        if code == 429 {
            tracing::debug!(
                path = %request.path,
                retry_after = ?response.retry_request_after,
                "Shopify REST request throttled"
            );
        }

        Err(ApiError::from_response(&response))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
