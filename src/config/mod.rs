//! Configuration types for the storefront SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with a shop's Storefront API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all SDK settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`ShopDomain`]: A validated shop domain
//! - [`AccessToken`]: A validated storefront access token with masked debug output
//! - [`ApiVersion`]: The Storefront API version to use
//! - [`EndpointUrl`]: An optional endpoint override (proxies, tests)
//!
//! # Example
//!
//! ```rust
//! use storefront_sdk::{AccessToken, ApiVersion, ShopDomain, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("storefront-token").unwrap())
//!     .api_version(ApiVersion::new("2024-01").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiVersion, EndpointUrl, ShopDomain};

use crate::error::ConfigError;

/// Configuration for the storefront SDK.
///
/// This struct holds everything needed to reach one shop's Storefront API:
/// the shop domain, the static access token, and the pinned API version.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::{AccessToken, ShopDomain, StorefrontConfig};
///
/// let config = StorefrontConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("storefront-token").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    endpoint: Option<EndpointUrl>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_sdk::{AccessToken, ShopDomain, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the storefront access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the endpoint override, if configured.
    #[must_use]
    pub const fn endpoint(&self) -> Option<&EndpointUrl> {
        self.endpoint.as_ref()
    }

    /// Returns the full GraphQL endpoint URL for this configuration.
    ///
    /// The Storefront API lives at `https://{shop}/api/{version}/graphql.json`;
    /// a configured [`EndpointUrl`] replaces the `https://{shop}` base.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_sdk::{AccessToken, ApiVersion, ShopDomain, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .api_version(ApiVersion::new("2024-01").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     config.graphql_url(),
    ///     "https://my-store.myshopify.com/api/2024-01/graphql.json"
    /// );
    /// ```
    #[must_use]
    pub fn graphql_url(&self) -> String {
        let base = self.endpoint.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |endpoint| endpoint.as_ref().to_string(),
        );
        format!("{}/api/{}/graphql.json", base, self.api_version)
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required
/// fields are `shop` and `access_token`. All other fields have defaults.
///
/// # Defaults
///
/// - `api_version`: Latest stable version known to the crate
/// - `endpoint`: `None` (requests go to the shop domain directly)
///
/// # Example
///
/// ```rust
/// use storefront_sdk::{AccessToken, ApiVersion, ShopDomain, StorefrontConfig};
///
/// let config = StorefrontConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .api_version(ApiVersion::new("2024-01").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    endpoint: Option<EndpointUrl>,
}

impl StorefrontConfigBuilder {
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

    /// Sets the storefront access token (required).
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

    /// Sets an endpoint override for the `https://{shop}` base URL.
    ///
    /// Useful for routing through a proxy or pointing at a mock server.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` was not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(StorefrontConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            endpoint: self.endpoint,
        })
    }
}
