//! Item fixtures for creating in-memory test data.

use entity::{item, sea_orm_active_enums::ItemType};

/// Default test item price.
pub const DEFAULT_PRICE: i32 = 10000;

/// Default test stock quantity.
pub const DEFAULT_STOCK_QUANTITY: i32 = 10;

/// Creates a book entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"JPA Programming"`
/// - price: `10000`
/// - stock_quantity: `10`
/// - author / isbn: `"Kim"` / `"978-0000000000"`
pub fn book_entity() -> item::Model {
    item::Model {
        id: 1,
        dtype: ItemType::Book,
        name: "JPA Programming".to_string(),
        price: DEFAULT_PRICE,
        stock_quantity: DEFAULT_STOCK_QUANTITY,
        author: Some("Kim".to_string()),
        isbn: Some("978-0000000000".to_string()),
        artist: None,
        etc: None,
        director: None,
        actor: None,
    }
}

/// Creates an album entity model with default values.
pub fn album_entity() -> item::Model {
    item::Model {
        id: 2,
        dtype: ItemType::Album,
        name: "Greatest Hits".to_string(),
        author: None,
        isbn: None,
        artist: Some("Band".to_string()),
        etc: Some("Remastered".to_string()),
        ..book_entity()
    }
}
