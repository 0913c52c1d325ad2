use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        item::UpdateItemParam,
        order::{DeliveryStatus, OrderSearch, OrderStatus},
    },
    service::{
        item::ItemService,
        order::{OrderService, PlaceOrderParam},
    },
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod cancel_order;
mod find_orders;

/// Creates a member and a book priced 10000 with `stock` units.
async fn member_and_book(
    db: &DatabaseConnection,
    stock: i32,
) -> Result<(entity::member::Model, entity::item::Model), AppError> {
    let member = factory::member::MemberFactory::new(db)
        .address("Seoul", "Teheran-ro", "06234")
        .build()
        .await?;
    let item = factory::item::ItemFactory::new(db)
        .price(10000)
        .stock_quantity(stock)
        .build()
        .await?;

    Ok((member, item))
}

async fn stock_of(db: &DatabaseConnection, item_id: i32) -> Result<i32, AppError> {
    let item = ItemService::new(db)
        .find_one(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", item_id)))?;

    Ok(item.stock_quantity)
}
