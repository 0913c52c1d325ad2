//! Database repository layer for the shop's entities.
//!
//! Repositories wrap SeaORM queries for one aggregate each and convert entity models
//! into domain models at this boundary. Every repository is generic over
//! `ConnectionTrait` so services can run it against the pool or an open transaction.

pub mod item;
pub mod member;
pub mod order;
pub mod order_simple_query;

#[cfg(test)]
mod test;
