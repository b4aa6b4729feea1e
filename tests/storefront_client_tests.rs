//! Integration tests for the Storefront API client.
//!
//! These tests run the client against a local mock server and verify
//! endpoint construction, header injection, envelope unwrapping, and the
//! error taxonomy.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_sdk::{
    AccessToken, ApiVersion, CartLineInput, ClientError, EndpointUrl, ShopDomain,
    StorefrontClient, StorefrontConfig, ACCESS_TOKEN_HEADER,
};

const GRAPHQL_PATH: &str = "/api/2024-01/graphql.json";

/// Builds a client whose requests land on the mock server.
fn client_for(server: &MockServer) -> StorefrontClient {
    let config = StorefrontConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_version(ApiVersion::new("2024-01").unwrap())
        .endpoint(EndpointUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    StorefrontClient::new(&config)
}

fn product_node(id: &str, title: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "handle": title.to_lowercase().replace(' ', "-"),
        "description": "",
        "tags": tags,
        "images": { "edges": [] },
        "variants": {
            "edges": [
                {
                    "node": {
                        "id": format!("{id}-variant"),
                        "title": "Default Title",
                        "price": { "amount": "19.99", "currencyCode": "CAD" },
                        "compareAtPrice": null,
                        "availableForSale": true,
                        "quantityAvailable": 8
                    }
                }
            ]
        }
    })
}

// ============================================================================
// Request Construction Tests
// ============================================================================

#[tokio::test]
async fn test_request_posts_to_versioned_graphql_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.request("query { shop { name } }", None).await.unwrap();
}

#[tokio::test]
async fn test_request_sends_access_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header(ACCESS_TOKEN_HEADER, "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.request("query { shop { name } }", None).await.unwrap();
}

#[tokio::test]
async fn test_request_body_carries_query_and_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "variables": { "handle": "x" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request("query q($handle: String!) { x }", Some(json!({ "handle": "x" })))
        .await
        .unwrap();
}

// ============================================================================
// Envelope Unwrapping Tests
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.request("query { x }", None).await.unwrap_err();

    match error {
        ClientError::Transport(e) => {
            assert_eq!(e.status, 503);
            assert_eq!(e.body, "upstream unavailable");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_envelope_errors_surface_first_message_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Field 'products' doesn't exist" },
                { "message": "second error" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.request("query { x }", None).await.unwrap_err();

    match error {
        ClientError::Api(e) => assert_eq!(e.message, "Field 'products' doesn't exist"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_list_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "ok": true }, "errors": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client.request("query { x }", None).await.unwrap();
    assert_eq!(data, json!({ "ok": true }));
}

#[tokio::test]
async fn test_non_json_success_body_is_a_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not graphql</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.request("query { x }", None).await.unwrap_err();
    assert!(matches!(error, ClientError::Schema(_)));
}

// ============================================================================
// Catalog Operation Tests
// ============================================================================

#[tokio::test]
async fn test_product_by_handle_returns_typed_product() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(
            json!({ "variables": { "handle": "ecouteurs-bluetooth" } }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "product": product_node("p1", "Écouteurs Bluetooth", &["audio"]) }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = client
        .product_by_handle("ecouteurs-bluetooth")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(product.title, "Écouteurs Bluetooth");
    assert_eq!(product.variants.len(), 1);
    let variant = product.first_variant().unwrap();
    assert!(variant.available_for_sale);
    assert_eq!(variant.quantity_available, Some(8));
    assert_eq!(variant.price.currency_code, "CAD");
}

#[tokio::test]
async fn test_product_by_handle_null_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "product": null } })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let product = client.product_by_handle("unknown").await.unwrap();
    assert!(product.is_none());
}

#[tokio::test]
async fn test_product_payload_with_wrong_shape_is_a_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            // Missing variants/images connections entirely
            "data": { "product": { "id": "p1", "title": "Produit" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.product_by_handle("produit").await.unwrap_err();
    assert!(matches!(error, ClientError::Schema(_)));
}

#[tokio::test]
async fn test_list_products_unwraps_connection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": {
                    "edges": [
                        { "node": product_node("p1", "Produit Un", &[]) },
                        { "node": product_node("p2", "Produit Deux", &[]) }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = client.list_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "p1");
    assert_eq!(products[1].id, "p2");
}

#[tokio::test]
async fn test_featured_filters_by_tag_and_truncates() {
    let server = MockServer::start().await;

    // The upstream tag filter is not trusted: one of the returned products
    // does not actually carry the featured tag.
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": {
                    "edges": [
                        { "node": product_node("p1", "Un", &["best-seller"]) },
                        { "node": product_node("p2", "Deux", &["nouveau"]) },
                        { "node": product_node("p3", "Trois", &["best-seller"]) },
                        { "node": product_node("p4", "Quatre", &["best-seller"]) }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let featured = client.featured(2).await.unwrap();

    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0].id, "p1");
    assert_eq!(featured[1].id, "p3");
}

// ============================================================================
// Cart Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_cart_returns_remote_cart_with_checkout_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "lines": [
                        { "merchandiseId": "v1", "quantity": 2 },
                        { "merchandiseId": "v2", "quantity": 1 }
                    ]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "cartCreate": {
                    "cart": {
                        "id": "gid://shopify/Cart/c1",
                        "checkoutUrl": "https://test-shop.myshopify.com/checkout/c1",
                        "lines": {
                            "edges": [
                                { "node": { "quantity": 2, "merchandise": { "title": "Un" } } },
                                { "node": { "quantity": 1, "merchandise": { "title": "Deux" } } }
                            ]
                        }
                    },
                    "userErrors": []
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cart = client
        .create_cart(&[
            CartLineInput {
                merchandise_id: "v1".to_string(),
                quantity: 2,
            },
            CartLineInput {
                merchandise_id: "v2".to_string(),
                quantity: 1,
            },
        ])
        .await
        .unwrap();

    assert_eq!(cart.id, "gid://shopify/Cart/c1");
    assert_eq!(
        cart.checkout_url,
        "https://test-shop.myshopify.com/checkout/c1"
    );
    assert_eq!(cart.lines.len(), 2);
}

#[tokio::test]
async fn test_create_cart_user_error_propagates_first_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "cartCreate": {
                    "cart": null,
                    "userErrors": [
                        {
                            "code": "INVALID_MERCHANDISE_LINE",
                            "field": ["input", "lines", "0"],
                            "message": "Insufficient stock"
                        },
                        { "code": null, "field": null, "message": "second" }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .create_cart(&[CartLineInput {
            merchandise_id: "v1".to_string(),
            quantity: 99,
        }])
        .await
        .unwrap_err();

    match error {
        ClientError::Api(e) => assert_eq!(e.message, "Insufficient stock"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_cart_for_variant_sends_single_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "input": { "lines": [{ "merchandiseId": "v7", "quantity": 3 }] } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "cartCreate": {
                    "cart": {
                        "id": "c1",
                        "checkoutUrl": "https://test-shop.myshopify.com/checkout/c1",
                        "lines": { "edges": [] }
                    },
                    "userErrors": []
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cart = client.create_cart_for_variant("v7", 3).await.unwrap();
    assert_eq!(cart.id, "c1");
}
