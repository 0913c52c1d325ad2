use crate::{
    model::{member::AddressDto, order::OrderStatusDto},
    server::data::{order::OrderRepository, order_simple_query::OrderSimpleQueryRepository},
};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_order_dtos;
