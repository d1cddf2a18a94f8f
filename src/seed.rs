use sea_orm::*;

use crate::models::{product, sale};

/// Seed demo products and a sample sale for local development.
///
/// Products are reference data owned by an external system in production;
/// seeding them here gives a fresh database something to sell.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create Products (fixed IDs so re-running the seed is a no-op)
    let products = vec![
        (1, "Widget", 10.00),
        (2, "Gadget", 24.50),
        (3, "Doohickey", 3.75),
    ];

    for (product_id, name, unit_price) in products {
        let product = product::ActiveModel {
            product_id: Set(product_id),
            name: Set(name.to_owned()),
            unit_price: Set(unit_price),
        };
        product::Entity::insert(product)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(product::Column::ProductId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    // 2. Create a sample Sale against product 1, only on a fresh database
    let existing_sales = sale::Entity::find().count(db).await?;
    if existing_sales == 0 {
        let demo_sale = sale::ActiveModel {
            product_id: Set(1),
            quantity: Set(2),
            amount: Set(10.00 * 2.0),
            sale_date: Set("2025-01-15".to_owned()),
            customer_name: Set("Demo Customer".to_owned()),
            remarks: Set(Some("Seeded demo sale".to_owned())),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        sale::Entity::insert(demo_sale).exec(db).await?;
    }

    Ok(())
}
