use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::AddressDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatusDto {
    Order,
    Cancel,
}

/// Order summary assembled from an order and its member and delivery.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderDto {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: Option<AddressDto>,
}

/// Order summary projected directly by a single joined query.
///
/// Same shape as `SimpleOrderDto`, kept separate so the query layer does not depend
/// on the API's DTO.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSimpleQueryDto {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: Option<AddressDto>,
}

/// Fields posted by the order page.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormDto {
    pub member_id: i32,
    pub item_id: i32,
    pub count: i32,
}

/// Query string of the order list page. Empty strings mean "no filter".
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchDto {
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
}
