pub mod health;
pub mod sales;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Sales
        .route("/sales", get(sales::list_sales))
        .route("/sales", post(sales::create_sale))
        .route(
            "/sales/:id",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        .with_state(db)
}
