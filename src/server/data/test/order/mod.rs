use crate::server::{
    data::order::OrderRepository,
    model::{
        member::{Address, Member},
        order::{
            DeliveryStatus, NewDelivery, NewOrder, NewOrderItem, OrderSearch, OrderStatus,
        },
        item::Item,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_all;
mod find_by_id;
mod search;
