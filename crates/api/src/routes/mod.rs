pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the public API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products/          list active products (oldest first)
/// /products/{id}/     one active product, 404 if absent or inactive
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}
