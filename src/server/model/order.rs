//! Order domain models and parameters.
//!
//! An `Order` owns its `Delivery` and `OrderItem`s. New orders are assembled from
//! `NewOrder` / `NewOrderItem` / `NewDelivery` before they have identifiers; the
//! order-item factory is where stock is taken, so a shortage stops the order before
//! anything is written.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use entity::sea_orm_active_enums::{DeliveryStatus, OrderStatus};

use crate::{
    model::order::{OrderSearchDto, OrderSimpleQueryDto, OrderStatusDto, SimpleOrderDto},
    server::{
        error::{domain::DomainError, AppError},
        model::{
            item::Item,
            member::{Address, Member},
        },
    },
};

pub fn status_into_dto(status: OrderStatus) -> OrderStatusDto {
    match status {
        OrderStatus::Order => OrderStatusDto::Order,
        OrderStatus::Cancel => OrderStatusDto::Cancel,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: i32,
    pub address: Option<Address>,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn from_entity(entity: entity::delivery::Model) -> Self {
        Self {
            id: entity.id,
            address: Address::from_columns(entity.city, entity.street, entity.zipcode),
            status: entity.status,
        }
    }
}

/// One line of an order: a snapshot of the unit price and the quantity ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub item_id: i32,
    pub order_price: i32,
    pub count: i32,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            item_id: entity.item_id,
            order_price: entity.order_price,
            count: entity.count,
        }
    }

    pub fn total_price(&self) -> i64 {
        i64::from(self.order_price) * i64::from(self.count)
    }

    /// Returns this line's units to the item's stock.
    pub fn cancel(&self, item: &mut Item) -> Result<(), DomainError> {
        item.add_stock(self.count)
    }
}

/// A placed order with its delivery and lines loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub member_id: i32,
    pub delivery: Delivery,
    pub order_items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Assembles an order from its row and the rows it owns.
    pub fn from_entities(
        order: entity::order::Model,
        delivery: entity::delivery::Model,
        order_items: Vec<entity::order_item::Model>,
    ) -> Self {
        Self {
            id: order.id,
            member_id: order.member_id,
            delivery: Delivery::from_entity(delivery),
            order_items: order_items.into_iter().map(OrderItem::from_entity).collect(),
            status: order.status,
            order_date: order.order_date,
        }
    }

    /// Sum of every line's subtotal.
    pub fn total_price(&self) -> i64 {
        self.order_items.iter().map(OrderItem::total_price).sum()
    }

    /// Cancels the order and restores stock for each line.
    ///
    /// `items` must hold every item referenced by the order's lines; lines whose item
    /// is absent are not restocked.
    ///
    /// # Returns
    /// - `Ok(())` - Status is now `Cancel` and stock was returned
    /// - `Err(DomainError::AlreadyCancelled)` - Order was cancelled before
    /// - `Err(DomainError::AlreadyShipped)` - Delivery is complete
    /// - `Err(DomainError::StockOverflow)` - An item cannot take its units back; the
    ///   order stays in `Order` status and `items` must be discarded
    pub fn cancel(&mut self, items: &mut [Item]) -> Result<(), DomainError> {
        if self.status == OrderStatus::Cancel {
            return Err(DomainError::AlreadyCancelled(self.id));
        }
        if self.delivery.status == DeliveryStatus::Comp {
            return Err(DomainError::AlreadyShipped(self.id));
        }

        for order_item in &self.order_items {
            if let Some(item) = items.iter_mut().find(|item| item.id == order_item.item_id) {
                order_item.cancel(item)?;
            }
        }

        self.status = OrderStatus::Cancel;
        Ok(())
    }
}

/// Delivery to be created alongside a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub address: Option<Address>,
    pub status: DeliveryStatus,
}

impl NewDelivery {
    /// A delivery waiting to ship to the given address.
    pub fn ready(address: Option<Address>) -> Self {
        Self {
            address,
            status: DeliveryStatus::Ready,
        }
    }
}

/// Order line to be created alongside a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub item_id: i32,
    pub order_price: i32,
    pub count: i32,
}

impl NewOrderItem {
    /// Creates an order line and takes `count` units out of the item's stock.
    ///
    /// # Returns
    /// - `Ok(NewOrderItem)` - Line created, `item` stock decremented
    /// - `Err(DomainError::NotEnoughStock)` - Stock is short; `item` is unchanged
    pub fn create(item: &mut Item, order_price: i32, count: i32) -> Result<Self, DomainError> {
        item.remove_stock(count)?;

        Ok(Self {
            item_id: item.id,
            order_price,
            count,
        })
    }

    pub fn total_price(&self) -> i64 {
        i64::from(self.order_price) * i64::from(self.count)
    }
}

/// Order assembled in memory, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub member_id: i32,
    pub delivery: NewDelivery,
    pub order_items: Vec<NewOrderItem>,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl NewOrder {
    /// Creates an order in `Order` status dated now.
    pub fn create(member: &Member, delivery: NewDelivery, order_items: Vec<NewOrderItem>) -> Self {
        Self {
            member_id: member.id,
            delivery,
            order_items,
            status: OrderStatus::Order,
            order_date: Utc::now(),
        }
    }

    pub fn total_price(&self) -> i64 {
        self.order_items.iter().map(NewOrderItem::total_price).sum()
    }
}

/// Criteria for searching orders. Every present field must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSearch {
    /// Substring of the ordering member's name.
    ///
    /// Matched as SQL `LIKE '%name%'`: `%` and `_` in the text act as wildcards, and
    /// SQLite compares ASCII letters without regard to case.
    pub member_name: Option<String>,
    pub order_status: Option<OrderStatus>,
}

impl OrderSearch {
    /// Builds search criteria from the list page's query string.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Returns
    /// - `Ok(OrderSearch)` - Parsed criteria
    /// - `Err(AppError::BadRequest)` - Status is neither `ORDER` nor `CANCEL`
    pub fn from_dto(dto: OrderSearchDto) -> Result<Self, AppError> {
        let member_name = dto
            .member_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let order_status = match dto.order_status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some("ORDER") => Some(OrderStatus::Order),
            Some("CANCEL") => Some(OrderStatus::Cancel),
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Unknown order status '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            member_name,
            order_status,
        })
    }
}

/// Order exposed together with its member, as returned by the v1 endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGraph {
    #[serde(flatten)]
    pub order: Order,
    pub member: Member,
    pub total_price: i64,
}

impl OrderGraph {
    pub fn new(order: Order, member: Member) -> Self {
        let total_price = order.total_price();
        Self {
            order,
            member,
            total_price,
        }
    }
}

/// Summary of an order for listing views.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleOrder {
    pub order_id: i32,
    pub member_name: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub address: Option<Address>,
}

impl SimpleOrder {
    /// Builds a summary from an order row and its already-fetched member and delivery.
    pub fn from_entities(
        order: &entity::order::Model,
        member: &entity::member::Model,
        delivery: &entity::delivery::Model,
    ) -> Self {
        Self {
            order_id: order.id,
            member_name: member.name.clone(),
            order_date: order.order_date,
            status: order.status,
            address: Address::from_columns(
                delivery.city.clone(),
                delivery.street.clone(),
                delivery.zipcode.clone(),
            ),
        }
    }

    pub fn into_dto(self) -> SimpleOrderDto {
        SimpleOrderDto {
            order_id: self.order_id,
            name: self.member_name,
            order_date: self.order_date,
            order_status: status_into_dto(self.status),
            address: self.address.map(Address::into_dto),
        }
    }

    pub fn into_query_dto(self) -> OrderSimpleQueryDto {
        OrderSimpleQueryDto {
            order_id: self.order_id,
            name: self.member_name,
            order_date: self.order_date,
            order_status: status_into_dto(self.status),
            address: self.address.map(Address::into_dto),
        }
    }
}

/// Display line of an order on the order list page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// Order with the names needed to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListing {
    pub order: Order,
    pub member_name: String,
    pub lines: Vec<OrderLine>,
}
