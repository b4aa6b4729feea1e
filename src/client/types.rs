//! Typed records for Storefront API payloads.
//!
//! The API answers with string-keyed JSON and relay-style connection
//! envelopes (`edges`/`node`). Everything is validated into the explicit
//! records below at the client boundary; a response that does not match
//! fails with [`ClientError::Schema`](super::ClientError::Schema) instead of
//! producing half-filled values.
//!
//! Wire-level shapes live in the private [`wire`] module and are unwrapped
//! via `#[serde(from = "...")]` conversions, so callers only ever see flat
//! `Vec`s of domain records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with its currency code.
///
/// The API transmits amounts as decimal strings (`"24.99"`); they are parsed
/// into [`rust_decimal::Decimal`] so arithmetic stays exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// The decimal amount in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g. `"CAD"`).
    pub currency_code: String,
}

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Accessibility text, when the merchant provided one.
    pub alt_text: Option<String>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Opaque variant id, used as the cart line key and checkout merchandise id.
    pub id: String,
    /// Variant title (e.g. a size/color combination).
    #[serde(default)]
    pub title: String,
    /// Current price.
    pub price: Money,
    /// Pre-discount price, when the variant is on sale.
    pub compare_at_price: Option<Money>,
    /// Whether the variant can currently be sold.
    pub available_for_sale: bool,
    /// Units in stock; absent when the shop hides inventory levels.
    pub quantity_available: Option<i64>,
}

/// A catalog product.
///
/// Deserialized from the wire shape with its connection envelopes already
/// unwrapped: `images` and `variants` are plain vectors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::ProductNode")]
pub struct Product {
    /// Opaque product id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug identifying the product in the catalog.
    pub handle: String,
    /// Plain-text description.
    pub description: String,
    /// Rich-text description; only fetched on the product detail query.
    pub description_html: Option<String>,
    /// Merchant tags (drives the featured listing).
    pub tags: Vec<String>,
    /// Product imagery, primary image first.
    pub images: Vec<ProductImage>,
    /// Purchasable variants.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Returns the primary variant, the one listings display and add to cart.
    #[must_use]
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// Returns the primary image.
    #[must_use]
    pub fn featured_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// One line of a remote cart, echoed back on creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "wire::CartLineNode")]
pub struct RemoteCartLine {
    /// Quantity of the variant in the remote cart.
    pub quantity: u32,
    /// Variant title, when the merchandise is a product variant.
    pub title: String,
}

/// A cart created on the remote system.
///
/// Owned by the external API; the client only holds onto it long enough to
/// hand the checkout URL to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "wire::CartNode")]
pub struct RemoteCart {
    /// Opaque remote cart id.
    pub id: String,
    /// Externally hosted checkout page for this cart.
    pub checkout_url: String,
    /// Echo of the created line items.
    pub lines: Vec<RemoteCartLine>,
}

/// One variant/quantity pair submitted to cart creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    /// Variant id to purchase.
    pub merchandise_id: String,
    /// Desired quantity.
    pub quantity: u32,
}

/// A user-facing validation error reported by a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserError {
    /// Machine-readable error code.
    pub code: Option<String>,
    /// Path of the input field the error refers to.
    pub field: Option<Vec<String>>,
    /// Human-readable message, suitable for display.
    pub message: String,
}

/// Relay-style connection envelope, unwrapped at the boundary.
#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub(crate) edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub(crate) node: T,
}

impl<T> Connection<T> {
    pub(crate) fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// Wire shapes matching the raw GraphQL selections.
pub(crate) mod wire {
    use serde::Deserialize;

    use super::{Connection, Product, ProductImage, ProductVariant, RemoteCart, RemoteCartLine};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(crate) struct ProductNode {
        pub id: String,
        pub title: String,
        pub handle: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub description_html: Option<String>,
        #[serde(default)]
        pub tags: Vec<String>,
        pub images: Connection<ProductImage>,
        pub variants: Connection<ProductVariant>,
    }

    impl From<ProductNode> for Product {
        fn from(node: ProductNode) -> Self {
            Self {
                id: node.id,
                title: node.title,
                handle: node.handle,
                description: node.description,
                description_html: node.description_html,
                tags: node.tags,
                images: node.images.into_nodes(),
                variants: node.variants.into_nodes(),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct CartLineNode {
        pub quantity: u32,
        pub merchandise: MerchandiseNode,
    }

    /// The merchandise selection is an inline fragment; non-variant
    /// merchandise deserializes as an empty object.
    #[derive(Debug, Deserialize)]
    pub(crate) struct MerchandiseNode {
        #[serde(default)]
        pub title: String,
    }

    impl From<CartLineNode> for RemoteCartLine {
        fn from(node: CartLineNode) -> Self {
            Self {
                quantity: node.quantity,
                title: node.merchandise.title,
            }
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(crate) struct CartNode {
        pub id: String,
        pub checkout_url: String,
        pub lines: Connection<RemoteCartLine>,
    }

    impl From<CartNode> for RemoteCart {
        fn from(node: CartNode) -> Self {
            Self {
                id: node.id,
                checkout_url: node.checkout_url,
                lines: node.lines.into_nodes(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json() -> serde_json::Value {
        json!({
            "id": "gid://shopify/Product/1",
            "title": "Écouteurs Bluetooth",
            "handle": "ecouteurs-bluetooth",
            "description": "Des écouteurs sans fil.",
            "descriptionHtml": "<p>Des écouteurs sans fil.</p>",
            "tags": ["best-seller", "audio"],
            "images": {
                "edges": [
                    { "node": { "url": "https://cdn.example/1.png", "altText": "Écouteurs" } }
                ]
            },
            "variants": {
                "edges": [
                    {
                        "node": {
                            "id": "gid://shopify/ProductVariant/11",
                            "title": "Default Title",
                            "price": { "amount": "49.99", "currencyCode": "CAD" },
                            "compareAtPrice": null,
                            "availableForSale": true,
                            "quantityAvailable": 12
                        }
                    }
                ]
            }
        })
    }

    // === Product Tests ===

    #[test]
    fn test_product_unwraps_connection_envelopes() {
        let product: Product = serde_json::from_value(product_json()).unwrap();

        assert_eq!(product.handle, "ecouteurs-bluetooth");
        assert_eq!(product.images.len(), 1);
        assert_eq!(product.variants.len(), 1);
        assert_eq!(
            product.featured_image().unwrap().url,
            "https://cdn.example/1.png"
        );
    }

    #[test]
    fn test_product_money_parses_decimal_string() {
        let product: Product = serde_json::from_value(product_json()).unwrap();
        let variant = product.first_variant().unwrap();

        assert_eq!(variant.price.amount, Decimal::new(4999, 2));
        assert_eq!(variant.price.currency_code, "CAD");
        assert!(variant.compare_at_price.is_none());
        assert_eq!(variant.quantity_available, Some(12));
    }

    #[test]
    fn test_product_tolerates_listing_shape_without_description_html() {
        let mut value = product_json();
        value.as_object_mut().unwrap().remove("descriptionHtml");

        let product: Product = serde_json::from_value(value).unwrap();
        assert!(product.description_html.is_none());
    }

    #[test]
    fn test_product_rejects_missing_variants_connection() {
        let mut value = product_json();
        value.as_object_mut().unwrap().remove("variants");

        let result: Result<Product, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_money_rejects_non_decimal_amount() {
        let result: Result<Money, _> = serde_json::from_value(json!({
            "amount": "not-a-number",
            "currencyCode": "CAD"
        }));
        assert!(result.is_err());
    }

    // === RemoteCart Tests ===

    #[test]
    fn test_remote_cart_unwraps_lines() {
        let cart: RemoteCart = serde_json::from_value(json!({
            "id": "gid://shopify/Cart/c1",
            "checkoutUrl": "https://shop.example/checkout/c1",
            "lines": {
                "edges": [
                    {
                        "node": {
                            "quantity": 2,
                            "merchandise": { "title": "Default Title" }
                        }
                    }
                ]
            }
        }))
        .unwrap();

        assert_eq!(cart.checkout_url, "https://shop.example/checkout/c1");
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].title, "Default Title");
    }

    #[test]
    fn test_remote_cart_line_tolerates_empty_merchandise() {
        let line: RemoteCartLine = serde_json::from_value(json!({
            "quantity": 1,
            "merchandise": {}
        }))
        .unwrap();

        assert_eq!(line.title, "");
    }

    // === Input / UserError Tests ===

    #[test]
    fn test_cart_line_input_serializes_camel_case() {
        let input = CartLineInput {
            merchandise_id: "gid://shopify/ProductVariant/11".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(
            json,
            json!({ "merchandiseId": "gid://shopify/ProductVariant/11", "quantity": 3 })
        );
    }

    #[test]
    fn test_user_error_deserializes_with_optional_fields() {
        let error: UserError = serde_json::from_value(json!({
            "code": "INVALID",
            "field": ["input", "lines", "0", "quantity"],
            "message": "Quantity must be positive"
        }))
        .unwrap();

        assert_eq!(error.code.as_deref(), Some("INVALID"));
        assert_eq!(error.message, "Quantity must be positive");
    }
}
