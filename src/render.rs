//! Stateless HTML and price formatting.
//!
//! Pure string generation for the storefront UI: no state, no I/O. Callers
//! feed in catalog or cart data and splice the returned fragments into the
//! page. Interpolated text is HTML-escaped; URLs are attribute-escaped.
//!
//! Buttons and remove links carry `data-*` hooks (`data-cart-remove`,
//! `data-cart-checkout`, `data-cart-clear`) instead of inline handlers, so
//! the embedding page wires up its own listeners.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::LineItem;

/// Fallback thumbnail for items without imagery.
const PLACEHOLDER_IMAGE: &str =
    "https://lh3.googleusercontent.com/33Blywbs-uennH1cfGAaz0TMPxpqB0zU4r5FLDpn-q1ONwSjNKeV9Kl93exr9ITP1bfdmFn7_UvlCqqj6fnut40Zctro9lSlFYwKz9Y=w1064-v0";

/// Stock level below which the low-stock warning shows.
const LOW_STOCK_THRESHOLD: i64 = 5;

/// Formats an amount for display: two decimals, dollar sign, currency code.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront_sdk::render::format_price;
///
/// assert_eq!(format_price(Decimal::new(1999, 2), "CAD"), "19.99$ CAD");
/// assert_eq!(format_price(Decimal::new(5, 1), "CAD"), "0.50$ CAD");
/// ```
#[must_use]
pub fn format_price(amount: Decimal, currency: &str) -> String {
    format!("{:.2}$ {currency}", display_amount(amount))
}

/// Rounds to two decimals the way a price tag expects (midpoint away from
/// zero, not banker's rounding).
fn display_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Escapes text for interpolation into HTML content or attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full stock-level pill for a product page.
///
/// Three states: out of stock (unavailable or no units), low stock
/// (at most 5 units), and in stock.
#[must_use]
pub fn stock_indicator(quantity: i64, available_for_sale: bool) -> String {
    if !available_for_sale || quantity <= 0 {
        return r#"<span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-red-100 text-red-800">
  <svg class="w-4 h-4 mr-1" fill="currentColor" viewBox="0 0 20 20">
    <path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z" clip-rule="evenodd"></path>
  </svg>
  Rupture de stock
</span>"#
            .to_string();
    }

    if quantity <= LOW_STOCK_THRESHOLD {
        return format!(
            r#"<span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-yellow-100 text-yellow-800">
  <svg class="w-4 h-4 mr-1" fill="currentColor" viewBox="0 0 20 20">
    <path fill-rule="evenodd" d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z" clip-rule="evenodd"></path>
  </svg>
  Plus que {quantity} en stock
</span>"#
        );
    }

    format!(
        r#"<span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-green-100 text-green-800">
  <svg class="w-4 h-4 mr-1" fill="currentColor" viewBox="0 0 20 20">
    <path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"></path>
  </svg>
  {quantity} articles en stock
</span>"#
    )
}

/// Renders the compact stock badge used in product listings.
#[must_use]
pub fn stock_badge(quantity: i64, available_for_sale: bool) -> String {
    if !available_for_sale || quantity <= 0 {
        r#"<span class="text-xs font-medium text-red-600">Rupture de stock</span>"#.to_string()
    } else if quantity <= LOW_STOCK_THRESHOLD {
        format!(r#"<span class="text-xs font-medium text-yellow-600">Plus que {quantity} en stock</span>"#)
    } else {
        format!(r#"<span class="text-xs font-medium text-green-600">{quantity} en stock</span>"#)
    }
}

/// Renders the mini-cart dropdown fragment.
///
/// An empty cart renders a call-to-action back to the catalog; otherwise
/// one row per line item, the cart total, and checkout/clear buttons.
#[must_use]
pub fn mini_cart(items: &[LineItem], total: Decimal) -> String {
    if items.is_empty() {
        return r#"<div class="p-6 text-center">
  <svg class="w-16 h-16 mx-auto text-gray-300 mb-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"></path>
  </svg>
  <p class="text-gray-500">Votre panier est vide</p>
  <a href="catalogue.html" class="mt-4 inline-block text-blue-600 hover:underline font-medium">Voir le catalogue</a>
</div>"#
            .to_string();
    }

    let mut rows = String::new();
    for item in items {
        let image = item.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
        rows.push_str(&format!(
            r#"<div class="flex items-center gap-3 py-3 border-b border-gray-100">
  <img src="{image}" alt="{title}" class="w-14 h-14 object-contain rounded-lg bg-gray-50">
  <div class="flex-1 min-w-0">
    <p class="text-sm font-medium text-gray-900 truncate">{title}</p>
    <p class="text-sm text-gray-500">{quantity} × {unit_price:.2}$</p>
  </div>
  <button data-cart-remove="{variant_id}" class="text-gray-400 hover:text-red-500 p-1">
    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
      <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
    </svg>
  </button>
</div>
"#,
            image = escape(image),
            title = escape(&item.title),
            quantity = item.quantity,
            unit_price = display_amount(item.unit_price),
            variant_id = escape(&item.variant_id),
        ));
    }

    format!(
        r#"<div class="max-h-80 overflow-y-auto px-4">
{rows}</div>
<div class="p-4 border-t border-gray-200 bg-gray-50">
  <div class="flex justify-between items-center mb-4">
    <span class="font-semibold text-gray-900">Total</span>
    <span class="font-bold text-blue-600">{total:.2}$ CAD</span>
  </div>
  <button data-cart-checkout class="w-full bg-blue-600 text-white py-3 rounded-xl font-bold hover:bg-blue-700 transition">
    Passer commande
  </button>
  <button data-cart-clear class="w-full mt-2 text-sm text-gray-500 hover:text-red-500">
    Vider le panier
  </button>
</div>"#,
        total = display_amount(total),
    )
}
