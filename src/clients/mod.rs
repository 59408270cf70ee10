//! HTTP layer for the REST Admin API.
//!
//! - [`HttpClient`]: one authenticated exchange per call
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a prepared request
//! - [`HttpResponse`]: the raw response and its Shopify headers
//! - [`RestClient`]: path normalization and envelope unwrapping
//! - [`ApiError`]: the error type of every operation
//!
//! There is no automatic retry. A throttled request surfaces as
//! [`ApiError::Throttled`] with the server's `Retry-After`, and the caller
//! decides what to do.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, ErrorDetail, ResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use rest::RestClient;
