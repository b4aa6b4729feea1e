//! Storefront GraphQL client.
//!
//! This module provides the [`StorefrontClient`] type for executing the
//! crate's fixed GraphQL documents against one shop's Storefront API.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_sdk::{AccessToken, ShopDomain, StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .shop(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("storefront-token")?)
//!     .build()?;
//! let client = StorefrontClient::new(&config);
//!
//! if let Some(product) = client.product_by_handle("ecouteurs-bluetooth").await? {
//!     println!("{}", product.title);
//! }
//! ```

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::client::errors::{ApiError, ClientError, TransportError};
use crate::client::queries;
use crate::client::types::{CartLineInput, Connection, Product, RemoteCart, UserError};
use crate::config::StorefrontConfig;

/// HTTP header carrying the public storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// GraphQL client for one shop's Storefront API.
///
/// Every operation is a single POST of `{query, variables}` to the
/// configured `graphql.json` endpoint with the static access-token header.
/// The client holds no local state beyond the connection pool: no cache,
/// no retries, no timeouts — failures surface immediately to the caller.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync` and cheap to share across async tasks.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::{AccessToken, ShopDomain, StorefrontClient, StorefrontConfig};
///
/// let config = StorefrontConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("storefront-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StorefrontClient::new(&config);
/// assert!(client.endpoint().ends_with("/graphql.json"));
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full GraphQL endpoint URL.
    endpoint: String,
    /// Static access token sent with every request.
    access_token: String,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

/// GraphQL response envelope: `{data, errors?}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<serde_json::Value>,
    errors: Option<Vec<EnvelopeError>>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Connection<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCreateData {
    cart_create: CartCreatePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCreatePayload {
    cart: Option<RemoteCart>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl StorefrontClient {
    /// Creates a new client for the configured shop.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.graphql_url(),
            access_token: config.access_token().as_ref().to_string(),
        }
    }

    /// Returns the GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a GraphQL document and unwraps the response envelope.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if the request could not be sent or read
    /// - [`ClientError::Transport`] on a non-2xx HTTP status
    /// - [`ClientError::Api`] when the envelope's `errors` list is non-empty
    ///   (the first message is carried) or the envelope has no `data`
    /// - [`ClientError::Schema`] if the body is not a GraphQL envelope
    pub async fn request(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        debug!(endpoint = %self.endpoint, "dispatching GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(TransportError {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let envelope: Envelope = serde_json::from_str(&text)?;

        if let Some(first) = envelope.errors.into_iter().flatten().next() {
            warn!(message = %first.message, "GraphQL request reported errors");
            return Err(ApiError {
                message: first.message,
            }
            .into());
        }

        envelope.data.ok_or_else(|| {
            ApiError {
                message: "Response contained no data".to_string(),
            }
            .into()
        })
    }

    /// Fetches a single product by its handle.
    ///
    /// Returns `None` when no product matches the handle.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the underlying request, plus
    /// [`ClientError::Schema`] if the payload fails record validation.
    pub async fn product_by_handle(&self, handle: &str) -> Result<Option<Product>, ClientError> {
        let data = self
            .request(queries::PRODUCT_BY_HANDLE, Some(json!({ "handle": handle })))
            .await?;
        let data: ProductData = serde_json::from_value(data)?;
        Ok(data.product)
    }

    /// Fetches the catalog's first page of products.
    ///
    /// Bounded to [`queries::PAGE_SIZE`] products; there is no cursor
    /// pagination beyond the first page.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the underlying request.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let data = self.request(queries::LIST_PRODUCTS, None).await?;
        let data: ProductsData = serde_json::from_value(data)?;
        Ok(data.products.into_nodes())
    }

    /// Fetches up to `limit` featured products.
    ///
    /// The query asks the API to filter by the featured tag, but search
    /// indexing on the upstream can lag the catalog, so results are also
    /// filtered by tag here before truncating to `limit`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the underlying request.
    pub async fn featured(&self, limit: usize) -> Result<Vec<Product>, ClientError> {
        let data = self.request(queries::FEATURED_PRODUCTS, None).await?;
        let data: ProductsData = serde_json::from_value(data)?;

        Ok(data
            .products
            .into_nodes()
            .into_iter()
            .filter(|product| product.tags.iter().any(|tag| tag == queries::FEATURED_TAG))
            .take(limit)
            .collect())
    }

    /// Creates a remote cart from the given lines and returns it, checkout
    /// URL included.
    ///
    /// # Errors
    ///
    /// Fails with [`ClientError::Api`] carrying the first user-facing
    /// message when the mutation reports validation errors (invalid variant,
    /// insufficient stock); otherwise propagates the underlying
    /// [`ClientError`].
    pub async fn create_cart(&self, lines: &[CartLineInput]) -> Result<RemoteCart, ClientError> {
        let variables = json!({ "input": { "lines": lines } });

        let data = self.request(queries::CREATE_CART, Some(variables)).await?;
        let data: CartCreateData = serde_json::from_value(data)?;
        let payload = data.cart_create;

        if let Some(error) = payload.user_errors.into_iter().next() {
            warn!(message = %error.message, code = ?error.code, "cart creation rejected");
            return Err(ApiError {
                message: error.message,
            }
            .into());
        }

        payload.cart.ok_or_else(|| {
            ApiError {
                message: "Cart creation returned no cart".to_string(),
            }
            .into()
        })
    }

    /// Creates a remote cart holding a single variant.
    ///
    /// Convenience wrapper over [`create_cart`](Self::create_cart) for
    /// buy-now buttons.
    ///
    /// # Errors
    ///
    /// Same as [`create_cart`](Self::create_cart).
    pub async fn create_cart_for_variant(
        &self,
        variant_id: &str,
        quantity: u32,
    ) -> Result<RemoteCart, ClientError> {
        let line = CartLineInput {
            merchandise_id: variant_id.to_string(),
            quantity,
        };
        self.create_cart(std::slice::from_ref(&line)).await
    }
}
