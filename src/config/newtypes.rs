//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its input once, on construction. Holding one of these
//! types means the value is usable for building request URLs and headers.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A static Admin API access token.
///
/// The token is sent verbatim in the `X-Shopify-Access-Token` header. Its
/// `Debug` output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Shopify shop domain.
///
/// Accepts either the short shop name (`my-store`) or the full
/// `my-store.myshopify.com` form and always stores the full form.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new shop domain, normalizing to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty, has
    /// a foreign suffix, or the shop name contains anything other than
    /// lowercase letters, digits and inner hyphens.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let full_domain = if domain.ends_with(Self::SUFFIX) {
            domain
        } else if domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            format!("{domain}{}", Self::SUFFIX)
        };

        let shop_name_end = full_domain.len() - Self::SUFFIX.len();
        if !Self::is_valid_shop_name(&full_domain[..shop_name_end]) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            full_domain,
            shop_name_end,
        })
    }

    /// Returns the shop name without the `.myshopify.com` suffix.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An explicit API host that replaces `https://{shop}` as the request origin.
///
/// Used to route traffic through a proxy or at a local mock server. Only the
/// origin (`scheme://host[:port]`) is kept; any path is discarded.
///
/// # Example
///
/// ```rust
/// use shopify_rest::HostUrl;
///
/// let host = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), "127.0.0.1");
/// assert_eq!(host.origin(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    origin: String,
    scheme_end: usize,
    host_end: usize,
}

impl HostUrl {
    /// Parses and validates a host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is missing or
    /// not alphabetic, or if the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let authority_start = scheme_end + 3;
        let authority_end = url[authority_start..]
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| authority_start + i);
        let authority = &url[authority_start..authority_end];

        let host_len = authority.find(':').unwrap_or(authority.len());
        if host_len == 0 {
            return Err(invalid());
        }

        Ok(Self {
            origin: url[..authority_end].to_string(),
            scheme_end,
            host_end: authority_start + host_len,
        })
    }

    /// Returns the URL scheme (e.g. `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.origin[..self.scheme_end]
    }

    /// Returns the host name without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.origin[self.scheme_end + 3..self.host_end]
    }

    /// Returns `scheme://host[:port]`.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_and_blank() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat_super_secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super_secret"));
    }

    #[test]
    fn test_shop_domain_normalizes_short_format() {
        let domain = ShopDomain::new("My-Store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_accepts_full_format() {
        let domain = ShopDomain::new("my-store.myshopify.com").unwrap();
        assert_eq!(domain.to_string(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new(".myshopify.com").is_err());
        assert!(ShopDomain::new("my store").is_err());
        assert!(ShopDomain::new("my_store").is_err());
        assert!(ShopDomain::new("-my-store").is_err());
        assert!(ShopDomain::new("my-store-").is_err());
        assert!(ShopDomain::new("my-store.otherdomain.com").is_err());
    }

    #[test]
    fn test_shop_domain_serde_round_trip() {
        let original = ShopDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""my-store.myshopify.com""#);

        let restored: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_host_url_keeps_port_and_drops_path() {
        let url = HostUrl::new("http://localhost:3000/callback?x=1").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.origin(), "http://localhost:3000");

        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.origin(), "https://proxy.example.com");
        assert_eq!(url.host_name(), "proxy.example.com");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("ht7p://example.com").is_err());
    }
}
