use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::models::sale::SaleDto;
use crate::services::sale_service::{self, ServiceError};

/// Request body for creating or replacing a sale
#[derive(Debug, Deserialize)]
pub struct SaleRequest {
    pub product_id: i32,
    pub quantity: i32,
    /// Calendar date of the transaction (YYYY-MM-DD)
    pub sale_date: String,
    pub customer_name: String,
    pub remarks: Option<String>,
}

impl From<SaleRequest> for SaleDto {
    fn from(payload: SaleRequest) -> Self {
        Self {
            product_id: payload.product_id,
            quantity: payload.quantity,
            sale_date: payload.sale_date,
            customer_name: payload.customer_name,
            remarks: payload.remarks,
        }
    }
}

fn error_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::ProductNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "error": format!("Product {} not found", id)
            })),
        )
            .into_response(),
        ServiceError::SaleNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "error": format!("Sale {} not found", id)
            })),
        )
            .into_response(),
        ServiceError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": format!("Database error: {}", msg)
            })),
        )
            .into_response(),
    }
}

/// POST /api/sales - Record a new sale
pub async fn create_sale(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<SaleRequest>,
) -> impl IntoResponse {
    match sale_service::create_sale(&db, payload.into()).await {
        Ok(sale) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "sale": sale
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/sales - List all sales, newest first
pub async fn list_sales(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match sale_service::list_sales(&db).await {
        Ok(sales) => {
            let count = sales.len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "sales": sales,
                    "count": count
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/sales/:id - Get a single sale
pub async fn get_sale(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match sale_service::get_sale(&db, id).await {
        Ok(sale) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "sale": sale
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/sales/:id - Replace a sale's fields
pub async fn update_sale(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<SaleRequest>,
) -> impl IntoResponse {
    match sale_service::update_sale(&db, id, payload.into()).await {
        Ok(sale) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "sale": sale
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/sales/:id - Permanently delete a sale
pub async fn delete_sale(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match sale_service::delete_sale(&db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": format!("Sale {} deleted successfully", id)
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
