use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed_catalog, Product};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn post(uri: &str) -> Request<String> {
    Request::builder().method("POST").uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_products_returns_seed_in_id_order() {
    let resp = app().oneshot(get("/api/products")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products, seed_catalog());
}

#[tokio::test]
async fn list_products_empty() {
    let resp = app_with(Vec::new()).oneshot(get("/api/products")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}

// --- get ---

#[tokio::test]
async fn get_product_by_id() {
    let resp = app().oneshot(get("/api/products/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let product: Product = body_json(resp).await;
    assert_eq!(product.id, 3);
    assert_eq!(product.name, "Canvas Tote");
}

#[tokio::test]
async fn get_product_not_found() {
    let resp = app().oneshot(get("/api/products/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "product not found");
}

#[tokio::test]
async fn get_product_bad_id_returns_400() {
    let resp = app().oneshot(get("/api/products/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "invalid product ID");
}

#[tokio::test]
async fn routes_live_under_api_prefix() {
    let resp = app().oneshot(get("/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- like ---

#[tokio::test]
async fn like_product_not_found() {
    let resp = app().oneshot(post("/api/products/999/like")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "product not found");
}

#[tokio::test]
async fn like_product_requires_post() {
    let resp = app().oneshot(get("/api/products/1/like")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn like_increments_and_returns_empty_body() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(post("/api/products/2/like"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(post("/api/products/2/like"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/products/2"))
        .await
        .unwrap();
    let product: Product = body_json(resp).await;
    assert_eq!(product.likes, 2);

    // other products are untouched
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/products"))
        .await
        .unwrap();
    let products: Vec<Product> = body_json(resp).await;
    let seed = seed_catalog();
    for (served, seeded) in products.iter().zip(&seed) {
        if served.id != 2 {
            assert_eq!(served, seeded);
        }
    }
}

// --- cors ---

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = Request::builder()
        .uri("/api/products")
        .header("origin", "http://localhost:5173")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
