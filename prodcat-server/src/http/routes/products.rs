//! Product CRUD endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ProductId};
use crate::http::server::AppState;
use crate::models::{ListWindow, ProductDraft};

/// Create/update request body. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
}

impl ProductPayload {
    fn validated(&self) -> Result<ProductDraft, ApiError> {
        Ok(ProductDraft::new(&self.name, self.price)?)
    }
}

/// Raw `count`/`start` query params.
///
/// Kept as strings so unparsable values default silently instead of
/// tripping axum's query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl ListQuery {
    fn window(&self) -> ListWindow {
        let parse = |raw: &Option<String>| raw.as_deref().and_then(|s| s.parse::<i64>().ok());
        ListWindow::new(parse(&self.count).unwrap_or(10), parse(&self.start).unwrap_or(0))
    }
}

/// Delete confirmation body
#[derive(Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

/// GET /products - list with optional count/start bounds
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list(query.window()).await?;
    Ok(Json(products))
}

/// GET /product/{id} - fetch one product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(product))
}

/// POST /product - create from a name/price body
async fn create_product(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = payload.validated()?;
    let product = ProductRepo::new(&state.pool).create(&draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/{id} - update name and price; the id never changes
async fn update_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let draft = payload.validated()?;
    let product = ProductRepo::new(&state.pool).update(id, &draft).await?;
    Ok(Json(product))
}

/// DELETE /product/{id} - remove a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ProductId(id): ProductId,
) -> Result<Json<DeleteResponse>, ApiError> {
    ProductRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeleteResponse { result: "success" }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products))
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
