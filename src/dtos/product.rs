// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::models::product::ProductPatch;
use crate::store::NewProduct;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

// Request bodies keep every field optional so a missing field becomes a
// 400 with our message rather than an extractor rejection.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub quantity: Option<i64>,
}

/// Body of the id-in-body PUT: the full record, id included.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProductRequest {
    pub id: Option<i64>,
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub quantity: Option<i64>,
}

/// Any `id` is accepted; one that is not an integer simply matches nothing.
#[derive(Debug, Deserialize)]
pub struct DeleteProductRequest {
    #[serde(default)]
    pub id: Option<Value>,
}

impl DeleteProductRequest {
    pub fn target_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(Value::as_i64)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsRequest {
    #[serde(default)]
    pub search_term: Option<String>,
}

impl SearchProductsRequest {
    /// A missing or null term matches every product.
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// Zero price or quantity fails the presence check, the same as a missing one.
fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn present_number<N: Default + PartialEq>(value: Option<N>) -> Option<N> {
    value.filter(|v| *v != N::default())
}

fn check_ranges(price: Option<f64>, quantity: Option<i64>) -> Result<(), AppError> {
    if let Some(price) = price {
        if price < 0.0 {
            return Err(AppError::validation("Price cannot be negative"));
        }
    }
    if let Some(quantity) = quantity {
        if quantity < 0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
    }
    Ok(())
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct, AppError> {
        match (
            present_text(self.product_name),
            present_number(self.price),
            present_text(self.image),
            present_number(self.quantity),
        ) {
            (Some(product_name), Some(price), Some(image), Some(quantity)) => {
                check_ranges(Some(price), Some(quantity))?;
                Ok(NewProduct {
                    product_name,
                    price,
                    image,
                    quantity,
                })
            }
            _ => Err(AppError::validation(ALL_FIELDS_REQUIRED)),
        }
    }
}

impl ReplaceProductRequest {
    /// Returns the target id and a patch that overwrites every field.
    pub fn validate(self) -> Result<(i64, ProductPatch), AppError> {
        let id = present_number(self.id)
            .ok_or_else(|| AppError::validation(ALL_FIELDS_REQUIRED))?;
        let fields = CreateProductRequest {
            product_name: self.product_name,
            price: self.price,
            image: self.image,
            quantity: self.quantity,
        }
        .validate()?;
        Ok((
            id,
            ProductPatch {
                product_name: Some(fields.product_name),
                price: Some(fields.price),
                image: Some(fields.image),
                quantity: Some(fields.quantity),
            },
        ))
    }
}

impl UpdateProductRequest {
    pub fn validate(self) -> Result<ProductPatch, AppError> {
        if matches!(self.product_name.as_deref(), Some("")) {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if matches!(self.image.as_deref(), Some("")) {
            return Err(AppError::validation("Image cannot be empty"));
        }
        check_ranges(self.price, self.quantity)?;
        Ok(ProductPatch {
            product_name: self.product_name,
            price: self.price,
            image: self.image,
            quantity: self.quantity,
        })
    }
}
