//! Fixed GraphQL documents sent to the Storefront API.
//!
//! Every request this client makes is one of these documents plus a small
//! variables object; nothing is generated at runtime. Field selections stay
//! aligned with the typed records in [`super::types`].

/// Page size for catalog listings. The client reads only the first page;
/// cursor pagination is out of scope.
pub const PAGE_SIZE: u32 = 50;

/// Tag that marks a product as featured on the home page.
pub const FEATURED_TAG: &str = "best-seller";

/// Fetches a single product, with full imagery and all variants.
pub const PRODUCT_BY_HANDLE: &str = r"
query getProduct($handle: String!) {
  product(handle: $handle) {
    id
    title
    description
    descriptionHtml
    handle
    tags
    images(first: 10) {
      edges {
        node {
          url
          altText
        }
      }
    }
    variants(first: 10) {
      edges {
        node {
          id
          title
          price {
            amount
            currencyCode
          }
          compareAtPrice {
            amount
            currencyCode
          }
          availableForSale
          quantityAvailable
        }
      }
    }
  }
}
";

/// Fetches the first catalog page with one image and one variant per product.
pub const LIST_PRODUCTS: &str = r"
query getAllProducts {
  products(first: 50) {
    edges {
      node {
        id
        title
        handle
        description
        tags
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
        variants(first: 1) {
          edges {
            node {
              id
              title
              price {
                amount
                currencyCode
              }
              compareAtPrice {
                amount
                currencyCode
              }
              availableForSale
              quantityAvailable
            }
          }
        }
      }
    }
  }
}
";

/// Fetches the first page of products carrying the featured tag.
pub const FEATURED_PRODUCTS: &str = r#"
query getFeaturedProducts {
  products(first: 50, query: "tag:best-seller") {
    edges {
      node {
        id
        title
        handle
        description
        tags
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
        variants(first: 1) {
          edges {
            node {
              id
              title
              price {
                amount
                currencyCode
              }
              compareAtPrice {
                amount
                currencyCode
              }
              availableForSale
              quantityAvailable
            }
          }
        }
      }
    }
  }
}
"#;

/// Creates a remote cart from a list of variant/quantity lines and returns
/// its checkout URL. Validation failures come back in `userErrors`.
pub const CREATE_CART: &str = r"
mutation createCart($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id
      checkoutUrl
      lines(first: 50) {
        edges {
          node {
            quantity
            merchandise {
              ... on ProductVariant {
                title
              }
            }
          }
        }
      }
    }
    userErrors {
      code
      field
      message
    }
  }
}
";
