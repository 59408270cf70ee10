//! REST request builder and executor.

use serde::de::DeserializeOwned;

use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::{ApiVersion, ShopifyConfig};

/// The shared request pipeline behind every resource service.
///
/// `RestClient` builds requests against `/admin/api/{version}/`, sends them
/// through [`HttpClient`], and unwraps the JSON envelope of the response.
/// It holds no mutable state; clones share one connection pool, so any
/// number of services and tasks can use it concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpMethod, RestClient};
/// use shopify_rest::rest::resources::Blog;
///
/// let client = RestClient::new(&config)?;
/// let request = client
///     .request(HttpMethod::Get, "blogs/241253187", Some("blog"))?
///     .query_param("fields", "id,title")
///     .build();
/// let blog: Blog = client.execute(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a REST client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ApiError> {
        tracing::warn!(
            "The REST Admin API is deprecated. Consider migrating to GraphQL. See: https://www.shopify.com/ca/partners/blog/all-in-on-graphql"
        );

        Ok(Self {
            http_client: HttpClient::new(config)?,
            api_version: config.api_version().clone(),
        })
    }

    /// Returns the API version requests are sent to.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Starts a request for `path`, relative to `/admin/api/{version}/`.
    ///
    /// `root_property` names the envelope key the executor extracts from the
    /// response; `None` means the whole body is the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `path` is empty after
    /// normalization.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        root_property: Option<&str>,
    ) -> Result<HttpRequestBuilder, ApiError> {
        let path = normalize_path(path)?;
        let builder = HttpRequest::builder(method, path);
        Ok(match root_property {
            Some(root) => builder.root_property(root),
            None => builder,
        })
    }

    /// Sends `request` and decodes the payload into `T`.
    ///
    /// # Errors
    ///
    /// - any error from [`HttpClient::send`]
    /// - [`ApiError::UnexpectedBody`] if the root property is missing or null
    /// - [`ApiError::Decode`] if the payload does not match `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let (status, payload) = self.exchange(&request).await?;

        let value = match request.root_property.as_deref() {
            Some(root) => take_root(payload, root).ok_or_else(|| ApiError::UnexpectedBody {
                status,
                reason: format!("response has no '{root}' property"),
            })?,
            None => payload,
        };

        decode(value, &request)
    }

    /// Sends `request` and decodes the payload as a list.
    ///
    /// A missing or null root property, or an empty body, is an empty list.
    ///
    /// # Errors
    ///
    /// - any error from [`HttpClient::send`]
    /// - [`ApiError::Decode`] if the payload is not a list of `T`
    pub async fn execute_list<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Vec<T>, ApiError> {
        let (_, payload) = self.exchange(&request).await?;

        let value = match request.root_property.as_deref() {
            Some(root) => take_root(payload, root),
            None => Some(payload).filter(|v| !v.is_null()),
        };

        value.map_or_else(|| Ok(Vec::new()), |value| decode(value, &request))
    }

    /// Sends `request` and ignores the success body.
    ///
    /// # Errors
    ///
    /// Returns any error from [`HttpClient::send`].
    pub async fn execute_unit(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.http_client.send(&request).await?;
        Ok(())
    }

    async fn exchange(
        &self,
        request: &HttpRequest,
    ) -> Result<(u16, serde_json::Value), ApiError> {
        let response = self.http_client.send(request).await?;
        let payload = response.json().map_err(|source| ApiError::Decode {
            context: format!("response body of {} {}", request.http_method, request.path),
            source,
        })?;
        Ok((response.code, payload))
    }
}

fn take_root(payload: serde_json::Value, root: &str) -> Option<serde_json::Value> {
    match payload {
        serde_json::Value::Object(mut map) => map.remove(root).filter(|v| !v.is_null()),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value, request: &HttpRequest) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        context: request.root_property.as_ref().map_or_else(
            || format!("response of {} {}", request.http_method, request.path),
            |root| format!("'{root}' in response of {} {}", request.http_method, request.path),
        ),
        source,
    })
}

/// Normalizes a REST path: leading `/` stripped, `.json` appended once.
fn normalize_path(path: &str) -> Result<String, ApiError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(ApiError::Validation {
            resource: "REST",
            reason: "request path is empty".to_string(),
        });
    }

    Ok(format!("{path}.json"))
}
