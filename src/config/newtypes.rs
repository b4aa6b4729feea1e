//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated storefront access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::AccessToken;
///
/// let token = AccessToken::new("my-storefront-token").unwrap();
/// assert_eq!(token.as_ref(), "my-storefront-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
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

/// A validated shop domain.
///
/// This newtype validates and normalizes shop domains to the full
/// `shop.myshopify.com` format.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// # Serialization
///
/// `ShopDomain` serializes to and deserializes from the full domain string:
///
/// ```rust
/// use storefront_sdk::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use storefront_sdk::ShopDomain;
///
/// // Short format is normalized
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// // Full format is accepted
/// let domain = ShopDomain::new("my-store.myshopify.com").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        // Check if it's already a full domain
        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            // Contains a dot but not myshopify.com suffix - invalid
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            // Short format - needs normalization
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        // Validate shop name
        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.full_domain
            .get(..self.shop_name_end)
            .unwrap_or(&self.full_domain)
    }

    /// Validates that a shop name contains only allowed characters.
    ///
    /// Shop names must be non-empty and contain only lowercase alphanumeric
    /// characters and hyphens, without leading or trailing hyphens.
    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }
        name.chars()
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
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let domain = String::deserialize(deserializer)?;
        Self::new(domain).map_err(de::Error::custom)
    }
}

/// A validated Storefront API version.
///
/// Shopify names API releases `YYYY-MM`; a shop pins whichever release it was
/// built against, so this is a validated string rather than an enumerated
/// release calendar. The sentinel `unstable` is also accepted.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::ApiVersion;
///
/// let version = ApiVersion::new("2024-01").unwrap();
/// assert_eq!(version.as_ref(), "2024-01");
///
/// // The crate default is the newest release it was developed against
/// let latest = ApiVersion::latest();
/// assert_eq!(latest.as_ref(), "2024-10");
///
/// assert!(ApiVersion::new("24-1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The newest stable release this crate was developed against.
    const LATEST: &'static str = "2024-10";

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is not
    /// `YYYY-MM` or `unstable`.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version == "unstable" || Self::is_release_format(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    /// Checks for the `YYYY-MM` release format with a plausible month.
    fn is_release_format(version: &str) -> bool {
        let Some((year, month)) = version.split_once('-') else {
            return false;
        };
        let year_ok = year.len() == 4 && year.chars().all(|c| c.is_ascii_digit());
        let month_ok = month.len() == 2
            && month.chars().all(|c| c.is_ascii_digit())
            && matches!(month.parse::<u8>(), Ok(1..=12));
        year_ok && month_ok
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated endpoint override URL.
///
/// When set on the configuration, requests are sent to this base URL instead
/// of `https://{shop}`. Used for proxies and for pointing the client at a
/// local mock server in tests.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::EndpointUrl;
///
/// let url = EndpointUrl::new("https://proxy.example.com").unwrap();
/// assert_eq!(url.as_ref(), "https://proxy.example.com");
///
/// // Trailing slashes are stripped
/// let url = EndpointUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
///
/// assert!(EndpointUrl::new("example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL has no
    /// `http://` or `https://` scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() && !host.contains('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidEndpointUrl { url }),
        }
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
