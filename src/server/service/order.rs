//! Order service for placing, cancelling, and listing orders.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::abort;
use crate::{
    model::order::{OrderSimpleQueryDto, SimpleOrderDto},
    server::{
        data::{
            item::ItemRepository, member::MemberRepository, order::OrderRepository,
            order_simple_query::OrderSimpleQueryRepository,
        },
        error::AppError,
        model::order::{
            NewDelivery, NewOrder, NewOrderItem, Order, OrderGraph, OrderListing, OrderSearch,
            OrderStatus,
        },
    },
};

/// Parameters for placing an order of a single item.
#[derive(Debug, Clone, Copy)]
pub struct PlaceOrderParam {
    pub member_id: i32,
    pub item_id: i32,
    pub count: i32,
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for `count` units of one item.
    ///
    /// Stock is taken, and the delivery, order, and order item are written in one
    /// transaction. On any failure nothing is persisted.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new order
    /// - `Err(AppError::BadRequest)` - `count` is not positive
    /// - `Err(AppError::NotFound)` - Member or item does not exist
    /// - `Err(AppError::DomainErr(NotEnoughStock))` - Stock is short
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn order(&self, param: PlaceOrderParam) -> Result<i32, AppError> {
        if param.count <= 0 {
            return Err(AppError::BadRequest(
                "Order count must be positive".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        match Self::place_order(&txn, param).await {
            Ok(order) => {
                txn.commit().await?;
                tracing::info!(
                    order_id = order.id,
                    member_id = order.member_id,
                    total_price = order.total_price(),
                    "Order placed"
                );
                Ok(order.id)
            }
            Err(err) => {
                let err = abort(txn, err).await;
                tracing::debug!(?param, error = %err, "Order rejected");
                Err(err)
            }
        }
    }

    async fn place_order(
        txn: &DatabaseTransaction,
        param: PlaceOrderParam,
    ) -> Result<Order, AppError> {
        let member = MemberRepository::new(txn)
            .find_by_id(param.member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", param.member_id)))?;

        let item_repo = ItemRepository::new(txn);
        let mut item = item_repo
            .find_by_id(param.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", param.item_id)))?;

        let price = item.price;
        let order_item = NewOrderItem::create(&mut item, price, param.count)?;
        let delivery = NewDelivery::ready(member.address.clone());
        let order = NewOrder::create(&member, delivery, vec![order_item]);

        item_repo.update_stock(&item).await?;
        let order = OrderRepository::new(txn).create(order).await?;

        Ok(order)
    }

    /// Cancels an order and returns its units to stock.
    ///
    /// # Returns
    /// - `Ok(())` - Order cancelled
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::DomainErr(AlreadyShipped))` - Delivery is complete
    /// - `Err(AppError::DomainErr(AlreadyCancelled))` - Order was cancelled before
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn cancel_order(&self, order_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        match Self::cancel(&txn, order_id).await {
            Ok(()) => {
                txn.commit().await?;
                tracing::info!(order_id, "Order cancelled");
                Ok(())
            }
            Err(err) => {
                let err = abort(txn, err).await;
                tracing::debug!(order_id, error = %err, "Cancel rejected");
                Err(err)
            }
        }
    }

    async fn cancel(txn: &DatabaseTransaction, order_id: i32) -> Result<(), AppError> {
        let order_repo = OrderRepository::new(txn);
        let mut order = order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        let item_repo = ItemRepository::new(txn);
        let item_ids = order
            .order_items
            .iter()
            .map(|order_item| order_item.item_id)
            .collect();
        let mut items = item_repo.find_by_ids(item_ids).await?;

        order.cancel(&mut items)?;

        for item in &items {
            item_repo.update_stock(item).await?;
        }
        order_repo.update_status(order.id, OrderStatus::Cancel).await?;

        Ok(())
    }

    /// Searches orders, newest first.
    pub async fn find_orders(&self, search: &OrderSearch) -> Result<Vec<OrderListing>, AppError> {
        Ok(OrderRepository::new(self.db).search(search).await?)
    }

    /// Gets an order with its delivery and order items.
    pub async fn find_one(&self, order_id: i32) -> Result<Option<Order>, AppError> {
        Ok(OrderRepository::new(self.db).find_by_id(order_id).await?)
    }

    /// Gets every order together with its member.
    pub async fn find_order_graphs(&self) -> Result<Vec<OrderGraph>, AppError> {
        Ok(OrderRepository::new(self.db).find_all_graphs().await?)
    }

    /// Gets order summaries, loading member and delivery separately for every order.
    pub async fn find_simple_orders_per_row(&self) -> Result<Vec<SimpleOrderDto>, AppError> {
        let summaries = OrderRepository::new(self.db)
            .find_all_simple_per_row()
            .await?;

        Ok(summaries.into_iter().map(|s| s.into_dto()).collect())
    }

    /// Gets order summaries, loading members and deliveries in bulk.
    pub async fn find_simple_orders_batched(&self) -> Result<Vec<SimpleOrderDto>, AppError> {
        let summaries = OrderRepository::new(self.db)
            .find_all_simple_batched()
            .await?;

        Ok(summaries.into_iter().map(|s| s.into_dto()).collect())
    }

    /// Gets order summaries projected by a single joined query.
    pub async fn find_simple_orders_projected(
        &self,
    ) -> Result<Vec<OrderSimpleQueryDto>, AppError> {
        Ok(OrderSimpleQueryRepository::new(self.db)
            .find_order_dtos()
            .await?)
    }
}
