use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::{
    create_product, delete_product, delete_product_by_body, get_product, get_products,
    replace_product, search_products, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(get_products)
                .post(create_product)
                .put(replace_product)
                .delete(delete_product_by_body)
                .patch(search_products),
        )
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
}
