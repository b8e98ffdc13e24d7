use super::*;
use axum::{http::StatusCode, routing::get, Router};
use shared::{domain::ProductId, error::ErrorCode};
use tokio::net::TcpListener;

async fn spawn_catalog_server(status: StatusCode, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        "/api/v1/products",
        get(move || async move { (status, body) }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Url::parse(&format!("http://{addr}/api/v1/products")).expect("url")
}

#[tokio::test]
async fn decodes_product_array() {
    let endpoint = spawn_catalog_server(
        StatusCode::OK,
        r#"[
            {"id": 1, "title": "Hoodie", "price": 44, "category": {"name": "Clothes"}, "images": ["https://i.imgur.com/a.jpeg"]},
            {"id": 2, "title": "Lamp", "price": 12.5, "images": "[\"https://i.imgur.com/b.jpeg\"]"}
        ]"#,
    )
    .await;

    let products = HttpCatalogSource::new(endpoint)
        .fetch_products()
        .await
        .expect("fetch products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[1].price, 12.5);
    assert_eq!(products[1].category_name(), None);
}

#[tokio::test]
async fn odd_optional_fields_do_not_sink_the_catalog() {
    let endpoint = spawn_catalog_server(
        StatusCode::OK,
        r#"[
            {"id": 1, "title": "Mystery", "price": 1, "category": {"name": null}, "description": 5, "images": {"0": "x"}},
            {"id": 2, "title": "Lamp", "price": 12.5, "category": {"name": "Home"}, "description": "Warm light"}
        ]"#,
    )
    .await;

    let products = HttpCatalogSource::new(endpoint)
        .fetch_products()
        .await
        .expect("fetch products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category_name(), None);
    assert_eq!(products[0].description_text(), None);
    assert_eq!(products[1].category_name(), Some("Home"));
    assert_eq!(products[1].description_text(), Some("Warm light"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let endpoint = spawn_catalog_server(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;

    let err = HttpCatalogSource::new(endpoint)
        .fetch_products()
        .await
        .expect_err("status failure");

    assert!(matches!(err, CatalogError::Status(500)));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let endpoint = spawn_catalog_server(StatusCode::OK, r#"{"not": "an array"}"#).await;

    let err = HttpCatalogSource::new(endpoint)
        .fetch_products()
        .await
        .expect_err("decode failure");

    assert_eq!(err.code(), ErrorCode::Decode);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/products")).expect("url");
    let err = HttpCatalogSource::new(endpoint)
        .fetch_products()
        .await
        .expect_err("transport failure");

    assert_eq!(err.code(), ErrorCode::Transport);
}
