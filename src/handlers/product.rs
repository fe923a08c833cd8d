// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::dtos::product::{
    CreateProductRequest, DeleteProductRequest, MessageResponse, ReplaceProductRequest,
    SearchProductsRequest, UpdateProductRequest,
};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::models::product::Product;
use crate::state::AppState;

const PRODUCT_NOT_FOUND: &str = "Product not found";

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.store.load().await?))
}

// GET /products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;

    Ok(Json(product))
}

// PATCH /products - Search by name
#[instrument(skip(state, payload))]
pub async fn search_products(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SearchProductsRequest>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.store.search(payload.term()).await?))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let new = payload.validate()?;
    let product = state.store.insert(new).await?;
    info!(id = product.id, "Product created");

    Ok(Json(product))
}

// PUT /products - Replace the product named by the body's id
#[instrument(skip(state, payload))]
pub async fn replace_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ReplaceProductRequest>,
) -> Result<Json<Product>, AppError> {
    let (id, patch) = payload.validate()?;
    let product = state
        .store
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
    info!(id, "Product replaced");

    Ok(Json(product))
}

// PUT /products/:id - Merge supplied fields into product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let patch = payload.validate()?;
    let product = state
        .store
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))?;
    info!(id, "Product updated");

    Ok(Json(product))
}

// DELETE /products - Delete by body id, answering with what remains
#[instrument(skip(state, payload))]
pub async fn delete_product_by_body(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DeleteProductRequest>,
) -> Result<Json<Vec<Product>>, AppError> {
    let remaining = match payload.target_id() {
        Some(id) => {
            let (removed, remaining) = state.store.remove(id).await?;
            info!(id, removed, "Product delete requested");
            remaining
        }
        None => state.store.load().await?,
    };

    Ok(Json(remaining))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let (removed, _) = state.store.remove(id).await?;
    if !removed {
        return Err(AppError::not_found(PRODUCT_NOT_FOUND));
    }
    info!(id, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}
