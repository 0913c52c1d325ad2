//! Order data repository for database operations.
//!
//! An order is stored across three tables: `orders`, its `delivery`, and its
//! `order_item` rows. This repository writes and reads them together and offers the
//! listing queries behind the simple-order API, each fetching related rows in a
//! different way.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    member::{Address, Member},
    order::{
        NewOrder, Order, OrderGraph, OrderLine, OrderListing, OrderSearch, OrderStatus,
        SimpleOrder,
    },
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order together with its delivery and order items.
    ///
    /// Should run inside a transaction so a failure part-way leaves no rows behind.
    ///
    /// # Arguments
    /// - `order` - Order assembled by `NewOrder::create`
    ///
    /// # Returns
    /// - `Ok(Order)` - The persisted order with generated ids
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(&self, order: NewOrder) -> Result<Order, DbErr> {
        let (city, street, zipcode) = Address::into_columns(order.delivery.address);

        let delivery = entity::delivery::ActiveModel {
            status: ActiveValue::Set(order.delivery.status),
            city: ActiveValue::Set(city),
            street: ActiveValue::Set(street),
            zipcode: ActiveValue::Set(zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let order_entity = entity::order::ActiveModel {
            member_id: ActiveValue::Set(order.member_id),
            delivery_id: ActiveValue::Set(delivery.id),
            order_date: ActiveValue::Set(order.order_date),
            status: ActiveValue::Set(order.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut order_items = Vec::with_capacity(order.order_items.len());
        for order_item in order.order_items {
            let entity = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order_entity.id),
                item_id: ActiveValue::Set(order_item.item_id),
                order_price: ActiveValue::Set(order_item.order_price),
                count: ActiveValue::Set(order_item.count),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            order_items.push(entity);
        }

        Ok(Order::from_entities(order_entity, delivery, order_items))
    }

    /// Finds an order with its delivery and order items.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error, or the order's delivery row is missing
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_children(order).await?))
    }

    /// Sets the status of an order.
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<(), DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Searches orders, newest first, with the names needed to display them.
    ///
    /// Member name matches as a substring; status matches exactly. Absent criteria
    /// do not filter. Deliveries, order items, and items are fetched in bulk.
    pub async fn search(&self, search: &OrderSearch) -> Result<Vec<OrderListing>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .find_also_related(entity::prelude::Member)
            .order_by_desc(entity::order::Column::Id);

        if let Some(member_name) = &search.member_name {
            query = query.filter(entity::member::Column::Name.contains(member_name));
        }
        if let Some(status) = search.order_status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        let rows = query.all(self.db).await?;

        let order_ids: Vec<i32> = rows.iter().map(|(order, _)| order.id).collect();
        let delivery_ids: Vec<i32> = rows.iter().map(|(order, _)| order.delivery_id).collect();

        let deliveries = self.deliveries_by_id(delivery_ids).await?;
        let mut order_items = self.order_items_by_order(order_ids).await?;

        let item_ids: Vec<i32> = order_items
            .values()
            .flatten()
            .map(|order_item| order_item.item_id)
            .collect();
        let item_names: HashMap<i32, String> = if item_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Item::find()
                .filter(entity::item::Column::Id.is_in(item_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|item| (item.id, item.name))
                .collect()
        };

        let mut listings = Vec::with_capacity(rows.len());
        for (order, member) in rows {
            let delivery = deliveries
                .get(&order.delivery_id)
                .cloned()
                .ok_or_else(|| missing_delivery(&order))?;
            let items = order_items.remove(&order.id).unwrap_or_default();

            let lines = items
                .iter()
                .map(|order_item| OrderLine {
                    item_name: item_names
                        .get(&order_item.item_id)
                        .cloned()
                        .unwrap_or_default(),
                    order_price: order_item.order_price,
                    count: order_item.count,
                })
                .collect();

            listings.push(OrderListing {
                member_name: member.map(|member| member.name).unwrap_or_default(),
                order: Order::from_entities(order, delivery, items),
                lines,
            });
        }

        Ok(listings)
    }

    /// Gets every order with its member, delivery, and order items.
    ///
    /// Related rows are fetched one order at a time.
    pub async fn find_all_graphs(&self) -> Result<Vec<OrderGraph>, DbErr> {
        let orders = entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let mut graphs = Vec::with_capacity(orders.len());
        for order in orders {
            let member = entity::prelude::Member::find_by_id(order.member_id)
                .one(self.db)
                .await?
                .ok_or_else(|| missing_member(&order))?;
            let order = self.load_children(order).await?;

            graphs.push(OrderGraph::new(order, Member::from_entity(member)));
        }

        Ok(graphs)
    }

    /// Gets every order summary, fetching member and delivery separately for each row.
    ///
    /// Issues `1 + 2N` queries for `N` orders.
    pub async fn find_all_simple_per_row(&self) -> Result<Vec<SimpleOrder>, DbErr> {
        let orders = entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let mut summaries = Vec::with_capacity(orders.len());
        for order in orders {
            let member = entity::prelude::Member::find_by_id(order.member_id)
                .one(self.db)
                .await?
                .ok_or_else(|| missing_member(&order))?;
            let delivery = entity::prelude::Delivery::find_by_id(order.delivery_id)
                .one(self.db)
                .await?
                .ok_or_else(|| missing_delivery(&order))?;

            summaries.push(SimpleOrder::from_entities(&order, &member, &delivery));
        }

        Ok(summaries)
    }

    /// Gets every order summary, fetching members and deliveries with one query each.
    ///
    /// Issues three queries regardless of the number of orders.
    pub async fn find_all_simple_batched(&self) -> Result<Vec<SimpleOrder>, DbErr> {
        let orders = entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let member_ids: Vec<i32> = orders.iter().map(|order| order.member_id).collect();
        let delivery_ids: Vec<i32> = orders.iter().map(|order| order.delivery_id).collect();

        let members: HashMap<i32, entity::member::Model> = if member_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Member::find()
                .filter(entity::member::Column::Id.is_in(member_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|member| (member.id, member))
                .collect()
        };
        let deliveries = self.deliveries_by_id(delivery_ids).await?;

        orders
            .iter()
            .map(|order| {
                let member = members
                    .get(&order.member_id)
                    .ok_or_else(|| missing_member(order))?;
                let delivery = deliveries
                    .get(&order.delivery_id)
                    .ok_or_else(|| missing_delivery(order))?;

                Ok(SimpleOrder::from_entities(order, member, delivery))
            })
            .collect()
    }

    /// Loads the delivery and order items owned by an order row.
    async fn load_children(&self, order: entity::order::Model) -> Result<Order, DbErr> {
        let delivery = entity::prelude::Delivery::find_by_id(order.delivery_id)
            .one(self.db)
            .await?
            .ok_or_else(|| missing_delivery(&order))?;

        let order_items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Order::from_entities(order, delivery, order_items))
    }

    async fn deliveries_by_id(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::delivery::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Delivery::find()
            .filter(entity::delivery::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|delivery| (delivery.id, delivery))
            .collect())
    }

    async fn order_items_by_order(
        &self,
        order_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::order_item::Model>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let order_items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for order_item in order_items {
            by_order
                .entry(order_item.order_id)
                .or_default()
                .push(order_item);
        }

        Ok(by_order)
    }
}

fn missing_member(order: &entity::order::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Member {} of order {} not found",
        order.member_id, order.id
    ))
}

fn missing_delivery(order: &entity::order::Model) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Delivery {} of order {} not found",
        order.delivery_id, order.id
    ))
}
