//! Sale Record Service - business logic for the sale lifecycle
//!
//! The derived `amount` is a snapshot of `unit_price * quantity` taken at
//! write time; reads never join back to the products table.

use sea_orm::*;

use crate::models::product::Entity as Product;
use crate::models::sale::{self, Entity as Sale, SaleDto};

/// Error type for service operations
#[derive(Debug)]
pub enum ServiceError {
    Database(String),
    ProductNotFound(i32),
    SaleNotFound(i32),
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}

/// List all sales, most recently created first.
///
/// Ties in `created_at` come back in whatever order SQLite yields
/// (rowid order in practice); nothing relies on it.
pub async fn list_sales(db: &DatabaseConnection) -> Result<Vec<sale::Model>, ServiceError> {
    let sales = Sale::find()
        .order_by_desc(sale::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(sales)
}

/// Get a single sale by ID
pub async fn get_sale(db: &DatabaseConnection, id: i32) -> Result<sale::Model, ServiceError> {
    Sale::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::SaleNotFound(id))
}

/// Record a new sale
///
/// The price lookup and the insert run in one transaction: a missing
/// product aborts with zero persisted side effects.
pub async fn create_sale(
    db: &DatabaseConnection,
    dto: SaleDto,
) -> Result<sale::Model, ServiceError> {
    let txn = db.begin().await?;

    let product = Product::find_by_id(dto.product_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::ProductNotFound(dto.product_id))?;

    let amount = product.unit_price * dto.quantity as f64;
    let now = chrono::Utc::now().to_rfc3339();

    let new_sale = sale::ActiveModel {
        product_id: Set(dto.product_id),
        quantity: Set(dto.quantity),
        amount: Set(amount),
        sale_date: Set(dto.sale_date),
        customer_name: Set(dto.customer_name),
        remarks: Set(dto.remarks),
        created_at: Set(now),
        ..Default::default()
    };

    let saved_sale = new_sale.insert(&txn).await?;
    txn.commit().await?;

    Ok(saved_sale)
}

/// Update an existing sale (full replacement of the caller-supplied fields)
///
/// `sale_id` and `created_at` are never altered.
pub async fn update_sale(
    db: &DatabaseConnection,
    id: i32,
    dto: SaleDto,
) -> Result<sale::Model, ServiceError> {
    let txn = db.begin().await?;

    let existing = Sale::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::SaleNotFound(id))?;

    // Recompute only when the commercial terms changed. An unchanged
    // product/quantity keeps the stored snapshot even if the product's
    // price has moved since the original write.
    let amount = if dto.product_id != existing.product_id || dto.quantity != existing.quantity {
        let product = Product::find_by_id(dto.product_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::ProductNotFound(dto.product_id))?;

        product.unit_price * dto.quantity as f64
    } else {
        existing.amount
    };

    let mut active_model: sale::ActiveModel = existing.into();
    active_model.product_id = Set(dto.product_id);
    active_model.quantity = Set(dto.quantity);
    active_model.amount = Set(amount);
    active_model.sale_date = Set(dto.sale_date);
    active_model.customer_name = Set(dto.customer_name);
    active_model.remarks = Set(dto.remarks);

    let updated_sale = active_model.update(&txn).await?;
    txn.commit().await?;

    Ok(updated_sale)
}

/// Permanently delete a sale
pub async fn delete_sale(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let sale = Sale::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::SaleNotFound(id))?;

    sale.delete(db).await?;
    Ok(())
}
