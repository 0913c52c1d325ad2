//! Order factory for creating orders together with their owned rows.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DeliveryStatus, OrderStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating a test order with one order item and a delivery.
///
/// Rows are written directly: the referenced item's stock is left untouched and the
/// delivery copies the member's address as stored.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let (order, delivery, order_item) = OrderFactory::new(&db, member.id, item.id)
///     .count(3)
///     .delivery_status(DeliveryStatus::Comp)
///     .build_with_children()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    item_id: i32,
    order_price: Option<i32>,
    count: i32,
    status: OrderStatus,
    delivery_status: DeliveryStatus,
    order_date: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_price: the item's current price
    /// - count: `1`
    /// - status: `ORDER`
    /// - delivery status: `READY`
    /// - order_date: now
    pub fn new(db: &'a DatabaseConnection, member_id: i32, item_id: i32) -> Self {
        Self {
            db,
            member_id,
            item_id,
            order_price: None,
            count: 1,
            status: OrderStatus::Order,
            delivery_status: DeliveryStatus::Ready,
            order_date: Utc::now(),
        }
    }

    pub fn order_price(mut self, order_price: i32) -> Self {
        self.order_price = Some(order_price);
        self
    }

    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn delivery_status(mut self, delivery_status: DeliveryStatus) -> Self {
        self.delivery_status = delivery_status;
        self
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Builds and inserts the order, returning only the order row.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let (order, _, _) = self.build_with_children().await?;
        Ok(order)
    }

    /// Builds and inserts the delivery, order, and order item.
    ///
    /// # Returns
    /// - `Ok((order, delivery, order_item))` - Created entities
    /// - `Err(DbErr)` - Member or item missing, or insert failed
    pub async fn build_with_children(
        self,
    ) -> Result<
        (
            entity::order::Model,
            entity::delivery::Model,
            entity::order_item::Model,
        ),
        DbErr,
    > {
        let member = entity::prelude::Member::find_by_id(self.member_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member with id {} not found",
                self.member_id
            )))?;

        let order_price = match self.order_price {
            Some(price) => price,
            None => {
                entity::prelude::Item::find_by_id(self.item_id)
                    .one(self.db)
                    .await?
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Item with id {} not found",
                        self.item_id
                    )))?
                    .price
            }
        };

        let delivery = entity::delivery::ActiveModel {
            status: ActiveValue::Set(self.delivery_status),
            city: ActiveValue::Set(member.city),
            street: ActiveValue::Set(member.street),
            zipcode: ActiveValue::Set(member.zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let order = entity::order::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            delivery_id: ActiveValue::Set(delivery.id),
            order_date: ActiveValue::Set(self.order_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let order_item = entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            item_id: ActiveValue::Set(self.item_id),
            order_price: ActiveValue::Set(order_price),
            count: ActiveValue::Set(self.count),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((order, delivery, order_item))
    }
}

/// Creates an order for one unit of the item with default values.
///
/// Shorthand for `OrderFactory::new(db, member_id, item_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    member_id: i32,
    item_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, member_id, item_id).build().await
}
