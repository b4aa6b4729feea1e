//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product-variant/quantity pair held in the local cart.
///
/// The serialized form uses the storage field names the web storefront
/// already writes (`variantId`, `price`, `image`, …), so an existing
/// persisted cart deserializes as-is.
///
/// Invariants are maintained by [`CartStore`](super::CartStore): at most one
/// item per `variant_id`, and `quantity` is always at least 1 — a quantity
/// of zero removes the item instead of storing a zero-quantity record.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_sdk::LineItem;
///
/// let item = LineItem {
///     variant_id: "gid://shopify/ProductVariant/11".to_string(),
///     product_id: "gid://shopify/Product/1".to_string(),
///     title: "Écouteurs Bluetooth".to_string(),
///     unit_price: Decimal::new(4999, 2),
///     quantity: 2,
///     image_url: None,
///     handle: "ecouteurs-bluetooth".to_string(),
/// };
///
/// assert_eq!(item.line_total(), Decimal::new(9998, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Variant id; unique key within the cart.
    pub variant_id: String,
    /// Product the variant belongs to.
    pub product_id: String,
    /// Display title.
    pub title: String,
    /// Price per unit.
    #[serde(rename = "price", with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Units in the cart; always ≥ 1 once stored.
    pub quantity: u32,
    /// Thumbnail URL, when the product has imagery.
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    /// Product handle, for linking back to the product page.
    pub handle: String,
}

impl LineItem {
    /// Returns `unit_price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> LineItem {
        LineItem {
            variant_id: "gid://shopify/ProductVariant/11".to_string(),
            product_id: "gid://shopify/Product/1".to_string(),
            title: "Trépied flexible".to_string(),
            unit_price: Decimal::new(2450, 2),
            quantity: 3,
            image_url: Some("https://cdn.example/t.png".to_string()),
            handle: "trepied-flexible-universel".to_string(),
        }
    }

    #[test]
    fn test_line_total_multiplies_price_by_quantity() {
        assert_eq!(sample_item().line_total(), Decimal::new(7350, 2));
    }

    #[test]
    fn test_serializes_with_storage_field_names() {
        let value = serde_json::to_value(sample_item()).unwrap();

        assert_eq!(
            value,
            json!({
                "variantId": "gid://shopify/ProductVariant/11",
                "productId": "gid://shopify/Product/1",
                "title": "Trépied flexible",
                "price": "24.50",
                "quantity": 3,
                "image": "https://cdn.example/t.png",
                "handle": "trepied-flexible-universel"
            })
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let item = sample_item();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_deserializes_without_image() {
        let item: LineItem = serde_json::from_value(json!({
            "variantId": "v1",
            "productId": "p1",
            "title": "Nettoyeur d'écran",
            "price": "9.99",
            "quantity": 1,
            "handle": "nettoyeur-ecran"
        }))
        .unwrap();

        assert!(item.image_url.is_none());
    }
}
