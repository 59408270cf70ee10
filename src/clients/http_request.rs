//! Prepared REST requests.
//!
//! An [`HttpRequest`] is everything the executor needs for one exchange
//! except the origin and credentials, which belong to the client.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the REST Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a record or collection.
    Get,
    /// Create a record or trigger an action.
    Post,
    /// Update a record.
    Put,
    /// Delete a record.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A prepared request, relative to `/admin/api/{version}/`.
///
/// Built with [`HttpRequest::builder`] or, more usually, with
/// [`RestClient::request`](crate::clients::RestClient::request), which
/// normalizes the path first.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "blogs.json")
///     .body(json!({"blog": {"title": "News"}}))
///     .root_property("blog")
///     .build();
///
/// assert_eq!(request.root_property.as_deref(), Some("blog"));
/// assert!(request.query.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to the versioned base path, e.g. `blogs/1.json`.
    pub path: String,
    /// Query parameters. `None` means no query string at all.
    pub query: Option<HashMap<String, String>>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
    /// Envelope key to unwrap from the response body.
    pub root_property: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for `method` against `path`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<HashMap<String, String>>,
    body: Option<serde_json::Value>,
    root_property: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            body: None,
            root_property: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merges a set of query parameters. An empty map leaves the query unset.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        if !query.is_empty() {
            self.query.get_or_insert_with(HashMap::new).extend(query);
        }
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the envelope key the executor extracts from the response.
    #[must_use]
    pub fn root_property(mut self, root: impl Into<String>) -> Self {
        self.root_property = Some(root.into());
        self
    }

    /// Finishes the request.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            root_property: self.root_property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_bare_request_has_no_query_body_or_root() {
        let request = HttpRequest::builder(HttpMethod::Get, "blogs/count.json").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "blogs/count.json");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
        assert!(request.root_property.is_none());
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request =
            HttpRequest::builder(HttpMethod::Post, "application_charges/7/activate.json").build();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_query_params_accumulate() {
        let mut extra = HashMap::new();
        extra.insert("handle".to_string(), "news".to_string());

        let request = HttpRequest::builder(HttpMethod::Get, "blogs.json")
            .query_param("since_id", "5")
            .query(extra)
            .build();

        let query = request.query.unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("since_id"), Some(&"5".to_string()));
        assert_eq!(query.get("handle"), Some(&"news".to_string()));
    }

    #[test]
    fn test_empty_query_map_leaves_query_unset() {
        let request = HttpRequest::builder(HttpMethod::Get, "blogs.json")
            .query(HashMap::new())
            .build();
        assert!(request.query.is_none());
    }

    #[test]
    fn test_body_and_root_property() {
        let request = HttpRequest::builder(HttpMethod::Put, "blogs/1.json")
            .body(json!({"blog": {"title": "Renamed"}}))
            .root_property("blog")
            .build();

        assert_eq!(request.body, Some(json!({"blog": {"title": "Renamed"}})));
        assert_eq!(request.root_property.as_deref(), Some("blog"));
    }
}
