use crate::server::{
    data::item::ItemRepository,
    model::item::{CreateItemParam, ItemKind, UpdateItemParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_ids;
mod update;
mod update_stock;
