//! Read-only query that projects order summaries straight from a joined select.

use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::{
    model::order::OrderSimpleQueryDto,
    server::model::{
        member::Address,
        order::{status_into_dto, OrderStatus},
    },
};

/// One row of orders joined with their member and delivery.
#[derive(Debug, FromQueryResult)]
struct OrderSimpleRow {
    order_id: i32,
    name: String,
    order_date: DateTime<Utc>,
    order_status: OrderStatus,
    city: Option<String>,
    street: Option<String>,
    zipcode: Option<String>,
}

/// Repository for order summaries that bypasses the domain models.
pub struct OrderSimpleQueryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderSimpleQueryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every order summary in a single query, ordered by order id.
    ///
    /// Only the columns the summary needs are selected.
    pub async fn find_order_dtos(&self) -> Result<Vec<OrderSimpleQueryDto>, DbErr> {
        let rows = entity::prelude::Order::find()
            .select_only()
            .column_as(entity::order::Column::Id, "order_id")
            .column_as(entity::member::Column::Name, "name")
            .column_as(entity::order::Column::OrderDate, "order_date")
            .column_as(entity::order::Column::Status, "order_status")
            .column_as(entity::delivery::Column::City, "city")
            .column_as(entity::delivery::Column::Street, "street")
            .column_as(entity::delivery::Column::Zipcode, "zipcode")
            .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
            .join(JoinType::InnerJoin, entity::order::Relation::Delivery.def())
            .order_by_asc(entity::order::Column::Id)
            .into_model::<OrderSimpleRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| OrderSimpleQueryDto {
                order_id: row.order_id,
                name: row.name,
                order_date: row.order_date,
                order_status: status_into_dto(row.order_status),
                address: Address::from_columns(row.city, row.street, row.zipcode)
                    .map(Address::into_dto),
            })
            .collect())
    }
}
