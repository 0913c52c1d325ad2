//! Factory methods for creating test data.
//!
//! Each factory inserts one entity with unique defaults and exposes builder methods
//! for the fields a test cares about. Factories handle foreign keys for you where
//! an entity owns its children (an order creates its delivery and order item).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let book = factory::item::ItemFactory::new(&db).price(10000).stock_quantity(10).build().await?;
//! let (order, delivery, order_item) =
//!     factory::order::OrderFactory::new(&db, member.id, book.id).count(2).build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `item` - Create book / album / movie entities
//! - `order` - Create an order with its delivery and a single order item
//! - `helpers` - Unique id generation and dependency helpers

pub mod helpers;
pub mod item;
pub mod member;
pub mod order;

pub use item::create_book;
pub use member::create_member;
pub use order::create_order;
