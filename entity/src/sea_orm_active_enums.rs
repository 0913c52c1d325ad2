use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of an order. An order starts as `Order` and may move to `Cancel` once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "ORDER")]
    Order,
    #[sea_orm(string_value = "CANCEL")]
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "READY")]
    Ready,
    /// Delivery completed; the order can no longer be cancelled.
    #[sea_orm(string_value = "COMP")]
    Comp,
}

/// Single-table discriminator for the item hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemType {
    #[sea_orm(string_value = "B")]
    Book,
    #[sea_orm(string_value = "A")]
    Album,
    #[sea_orm(string_value = "M")]
    Movie,
}
