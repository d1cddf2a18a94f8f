use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub amount: f64, // unit_price * quantity, snapshot at last write
    pub sale_date: String,
    pub customer_name: String,
    pub remarks: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Incoming payload for create and update (full replacement)
#[derive(Debug, Serialize, Deserialize)]
pub struct SaleDto {
    pub product_id: i32,
    pub quantity: i32,
    pub sale_date: String,
    pub customer_name: String,
    pub remarks: Option<String>,
}
