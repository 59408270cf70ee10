//! # Shopify REST Services
//!
//! Typed service objects for the Shopify REST Admin API.
//!
//! Each service method builds a request against a fixed URL pattern,
//! attaches query parameters or a JSON body, sends it through a shared
//! pipeline ([`RestClient`]) and decodes the response envelope into a typed
//! record or list.
//!
//! ## Overview
//!
//! - [`ShopifyConfig`]: shop, access token, API version, optional host
//!   override and user agent prefix
//! - [`rest::resources::BlogService`] and
//!   [`rest::resources::ApplicationChargeService`]: per-resource operations
//! - [`rest::ResourceService`]: the generic list/count/get/create/update/
//!   delete implementation behind them
//! - [`ApiError`]: the error type of every operation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_rest::{AccessToken, ShopDomain, ShopifyConfig};
//! use shopify_rest::rest::resources::{Blog, BlogListParams, BlogService};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("shpat_...")?)
//!     .build()?;
//!
//! let blogs = BlogService::new(&config)?;
//! let created = blogs
//!     .create(&Blog { title: "News".to_string().into(), ..Blog::default() }, None)
//!     .await?;
//! let all = blogs.list(&BlogListParams::default()).await?;
//! ```
//!
//! ## Sharing a client
//!
//! Services built with `with_client` share one connection pool:
//!
//! ```rust,ignore
//! use shopify_rest::RestClient;
//! use shopify_rest::rest::resources::{ApplicationChargeService, BlogService};
//!
//! let client = RestClient::new(&config)?;
//! let blogs = BlogService::with_client(client.clone());
//! let charges = ApplicationChargeService::with_client(client);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: configuration, clients and services are `Send + Sync`
//! - **No hidden retries**: throttling surfaces as [`ApiError::Throttled`]

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{
    AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, ApiError, ErrorDetail, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, ResponseError, RestClient,
};
