use serde::{Deserialize, Serialize};

/// One catalog record, stored and served with camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
    pub image: String,
    pub quantity: i64,
}

/// Field changes applied to an existing product. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub quantity: Option<i64>,
}

impl Product {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.product_name {
            self.product_name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }

    pub fn name_contains(&self, term: &str) -> bool {
        self.product_name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}
