//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version, used as the `{version}` segment of
/// `/admin/api/{version}/`.
///
/// Shopify ships a release every quarter (January, April, July, October).
/// Releases this crate knows about have their own variant; any other
/// well-formed `YYYY-MM` release parses into [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(version.to_string(), "2025-07");
///
/// let future: ApiVersion = "2027-01".parse().unwrap();
/// assert!(!future.is_stable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The `unstable` channel.
    Unstable,
    /// A quarterly release not listed above.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest release listed by this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` for a release with its own variant.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn is_quarterly_release(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        })
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            other if Self::is_quarterly_release(other) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_releases_and_unstable() {
        assert_eq!("2025-01".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_01);
        assert_eq!("2025-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_10);
        assert_eq!(" UNSTABLE ".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_unknown_quarterly_release_is_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert_eq!(version.to_string(), "2026-04");
        assert!(!version.is_stable());
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for bad in ["", "2025", "2025-02", "25-01", "2025-1", "abcd-01", "latest"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert!(ApiVersion::latest().is_stable());
    }
}
