//! SeaORM entities for the shop schema.
//!
//! Tables mirror the migrations in the `migration` crate. Orders own their
//! delivery and order items; members and items are only referenced.

pub mod prelude;

pub mod delivery;
pub mod item;
pub mod member;
pub mod order;
pub mod order_item;
pub mod sea_orm_active_enums;
