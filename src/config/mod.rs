//! Configuration for talking to one shop's REST Admin API.
//!
//! - [`ShopifyConfig`]: shop, credentials and API version, fixed at construction
//! - [`ShopifyConfigBuilder`]: consuming builder for [`ShopifyConfig`]
//! - [`ShopDomain`], [`AccessToken`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the `/admin/api/{version}/` segment
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_origin(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Everything a service needs to address and authenticate against a shop.
///
/// `ShopifyConfig` is immutable, `Clone`, `Send` and `Sync`. Services copy
/// what they need out of it when they are constructed.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin every request is sent to: the API host override
    /// when one is set, `https://{shop}` otherwise.
    #[must_use]
    pub fn api_origin(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |host| host.origin().to_string(),
        )
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required. `api_version` defaults to
/// [`ApiVersion::latest`]; `api_host` and `user_agent_prefix` default to unset.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{AccessToken, HostUrl, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .api_host(HostUrl::new("http://127.0.0.1:9000").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_origin(), "http://127.0.0.1:9000");
/// ```
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends every request to `host` instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` is not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ShopifyConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
