use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub likes: u64,
}

pub type Db = Arc<RwLock<BTreeMap<i64, Product>>>;

/// Error body shape shared by every failing route: `{"error": "..."}`.
#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: &'static str,
}

impl ErrorResponse {
    const INVALID_ID: Self = Self {
        status: StatusCode::BAD_REQUEST,
        message: "invalid product ID",
    };
    const NOT_FOUND: Self = Self {
        status: StatusCode::NOT_FOUND,
        message: "product not found",
    };
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

/// Demo catalog the standalone server starts with.
pub fn seed_catalog() -> Vec<Product> {
    let item = |id: i64, name: &str, description: &str, price: f64, image: Option<&str>, likes: u64| Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: image.map(str::to_string),
        likes,
    };
    vec![
        item(1, "Desk Lamp", "Adjustable lamp with a warm LED.", 24.99, None, 5),
        item(2, "Ceramic Mug", "Holds 350 ml of coffee.", 8.5, None, 0),
        item(
            3,
            "Canvas Tote",
            "Sturdy cotton bag for groceries.",
            19.0,
            Some("https://images.example.com/tote.jpg"),
            12,
        ),
        item(4, "Notebook", "A5 dotted, 120 pages.", 5.25, None, 3),
    ]
}

/// Router serving the seeded demo catalog.
pub fn app() -> Router {
    app_with(seed_catalog())
}

/// Router serving `products`. The list route returns them in id order.
pub fn app_with(products: Vec<Product>) -> Router {
    let db: Db = Arc::new(RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()));
    let api = Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}/like", post(like_product))
        .with_state(db);
    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

fn parse_id(raw: &str) -> Result<i64, ErrorResponse> {
    raw.parse().map_err(|_| ErrorResponse::INVALID_ID)
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let products = db.read().await;
    Json(products.values().cloned().collect())
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ErrorResponse> {
    let id = parse_id(&id)?;
    let products = db.read().await;
    products.get(&id).cloned().map(Json).ok_or(ErrorResponse::NOT_FOUND)
}

async fn like_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let id = parse_id(&id)?;
    let mut products = db.write().await;
    let product = products.get_mut(&id).ok_or(ErrorResponse::NOT_FOUND)?;
    product.likes = product.likes.saturating_add(1);
    info!(id, likes = product.likes, "product liked");
    Ok(StatusCode::OK)
}
