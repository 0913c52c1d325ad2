//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Member names are unique in the schema, so factories use this to derive defaults
/// that never collide inside a single test database.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member, a book, and an order for that book.
///
/// All entities use factory defaults: the book costs 10000 with 10 in stock and the
/// order is for a single unit. Stock is not adjusted since factories write rows
/// directly.
///
/// # Returns
/// - `Ok((member, item, order))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::item::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let item = crate::factory::item::create_book(db).await?;
    let order = crate::factory::order::create_order(db, member.id, item.id).await?;

    Ok((member, item, order))
}
