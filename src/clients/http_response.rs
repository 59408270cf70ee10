//! Raw REST responses and the Shopify headers read from them.

use std::collections::HashMap;

/// Reading of the `X-Shopify-Shop-Api-Call-Limit` header (`"X/Y"`).
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("39/40").unwrap();
/// assert_eq!(limit.request_count, 39);
/// assert_eq!(limit.bucket_size, 40);
/// assert!(limit.is_near_capacity());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently in the leaky bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an `"X/Y"` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// `true` when at most one request of headroom is left.
    #[must_use]
    pub const fn is_near_capacity(&self) -> bool {
        self.request_count.saturating_add(1) >= self.bucket_size
    }
}

/// A response as received, before any envelope unwrapping.
///
/// Header names are stored lowercase. The body is kept as text so that
/// empty bodies (`DELETE`, actions) and bare scalars (counts) need no special
/// casing until a caller decodes them.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercase names, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub text: String,
    /// Parsed `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Parsed `Retry-After`, in seconds.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the call-limit and retry headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        let api_call_limit = first_header(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);
        let retry_request_after = first_header(&headers, "retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            text,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_header(&self.headers, "x-shopify-api-deprecated-reason")
    }

    /// Parses the body as JSON. A blank body parses as `null`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&self.text)
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}
