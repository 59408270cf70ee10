//! Errors returned by REST service operations.
//!
//! Every operation returns `Result<T, ApiError>`. Non-2xx responses are
//! classified by status code into a variant that carries the parsed
//! [`ResponseError`]; everything else (transport, local validation,
//! encoding, decoding) has its own variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::ApiError;
//!
//! match blogs.get(42).await {
//!     Ok(blog) => println!("{:?}", blog.title),
//!     Err(ApiError::NotFound(e)) => println!("no such blog ({})", e.detail),
//!     Err(ApiError::Throttled(e)) => println!("retry after {:?}s", e.retry_after),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::clients::HttpResponse;

/// The `errors` payload of a failed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Field-level messages, from `{"errors": {"title": ["can't be blank"]}}`.
    ///
    /// An `errors` array is stored under the `base` field.
    Fields(HashMap<String, Vec<String>>),
    /// A single message, from `{"errors": "Not Found"}`, `{"error": "..."}`,
    /// or the raw body when it is not a recognized envelope.
    Message(String),
}

impl ErrorDetail {
    /// Extracts the detail from a response body.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let Ok(body) = serde_json::from_str::<serde_json::Value>(text) else {
            return Self::Message(text.trim().to_string());
        };

        match body.get("errors").or_else(|| body.get("error")) {
            Some(serde_json::Value::String(message)) => Self::Message(message.clone()),
            Some(serde_json::Value::Array(items)) => {
                let mut fields = HashMap::new();
                fields.insert("base".to_string(), strings(items));
                Self::Fields(fields)
            }
            Some(serde_json::Value::Object(map)) => Self::Fields(
                map.iter()
                    .map(|(field, messages)| {
                        let messages = match messages {
                            serde_json::Value::Array(items) => strings(items),
                            serde_json::Value::String(s) => vec![s.clone()],
                            other => vec![other.to_string()],
                        };
                        (field.clone(), messages)
                    })
                    .collect(),
            ),
            Some(other) => Self::Message(other.to_string()),
            None => Self::Message(text.trim().to_string()),
        }
    }

    /// Returns the messages for `field`, if this is a field map.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        match self {
            Self::Fields(fields) => fields.get(field).map(Vec::as_slice),
            Self::Message(_) => None,
        }
    }

    /// Returns the single message, if this is one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Fields(_) => None,
        }
    }
}

fn strings(items: &[serde_json::Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map_or_else(|| item.to_string(), ToString::to_string)
        })
        .collect()
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Fields(fields) => {
                let mut names: Vec<&String> = fields.keys().collect();
                names.sort();
                let rendered: Vec<String> = names
                    .into_iter()
                    .map(|name| format!("{name}: {}", fields[name].join(", ")))
                    .collect();
                f.write_str(&rendered.join("; "))
            }
        }
    }
}

/// A non-2xx response, reduced to what callers act on.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseError {
    /// The HTTP status code.
    pub status: u16,
    /// The parsed `errors` payload.
    pub detail: ErrorDetail,
    /// `X-Request-Id`, for support tickets.
    pub request_id: Option<String>,
    /// `Retry-After`, in seconds.
    pub retry_after: Option<f64>,
}

impl ResponseError {
    /// Builds a `ResponseError` from a raw response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            status: response.code,
            detail: ErrorDetail::parse(&response.text),
            request_id: response.request_id().map(ToString::to_string),
            retry_after: response.retry_request_after,
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.detail, self.status)?;
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id: {request_id}]")?;
        }
        Ok(())
    }
}

/// Error type for every REST service operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: the record or route does not exist.
    #[error("Not found: {0}")]
    NotFound(ResponseError),

    /// 401 or 403: the token is missing, invalid or lacks a scope.
    #[error("Unauthorized: {0}")]
    Unauthorized(ResponseError),

    /// 429: the call limit bucket is full. Not retried automatically.
    #[error("Throttled: {0}")]
    Throttled(ResponseError),

    /// 5xx: Shopify failed to handle the request.
    #[error("Service error: {0}")]
    Service(ResponseError),

    /// Any other non-2xx status, including 422 validation failures.
    #[error("Request failed: {0}")]
    Request(ResponseError),

    /// The exchange never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request was rejected locally, before any I/O.
    #[error("Invalid {resource} request: {reason}")]
    Validation {
        /// Resource the operation targeted.
        resource: &'static str,
        /// What was wrong.
        reason: String,
    },

    /// A request body or query could not be serialized. Nothing was sent.
    #[error("Failed to encode {context}: {source}")]
    Encode {
        /// What was being encoded.
        context: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A 2xx body could not be decoded.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A 2xx body did not contain what the operation expects.
    #[error("Unexpected response body ({status}): {reason}")]
    UnexpectedBody {
        /// The HTTP status code.
        status: u16,
        /// What was missing.
        reason: String,
    },
}

impl ApiError {
    /// Classifies a non-2xx response by status code.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let error = ResponseError::from_response(response);
        match error.status {
            404 => Self::NotFound(error),
            401 | 403 => Self::Unauthorized(error),
            429 => Self::Throttled(error),
            500..=599 => Self::Service(error),
            _ => Self::Request(error),
        }
    }

    /// Returns the wrapped response error, if the server answered.
    #[must_use]
    pub const fn response(&self) -> Option<&ResponseError> {
        match self {
            Self::NotFound(e)
            | Self::Unauthorized(e)
            | Self::Throttled(e)
            | Self::Service(e)
            | Self::Request(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status, if one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedBody { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => self.response().map(|e| e.status),
        }
    }

    /// Returns the parsed error detail, if the server answered with one.
    #[must_use]
    pub const fn detail(&self) -> Option<&ErrorDetail> {
        match self.response() {
            Some(e) => Some(&e.detail),
            None => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response().and_then(|e| e.request_id.as_deref())
    }

    /// Returns the `Retry-After` seconds of the failed response.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.response().and_then(|e| e.retry_after)
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<ResponseError>();
};
