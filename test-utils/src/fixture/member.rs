//! Member fixtures for creating in-memory test data.

use entity::member;

/// Default test member name.
pub const DEFAULT_NAME: &str = "kim";

/// Default test city.
pub const DEFAULT_CITY: &str = "Seoul";

/// Default test street.
pub const DEFAULT_STREET: &str = "Teheran-ro";

/// Default test zipcode.
pub const DEFAULT_ZIPCODE: &str = "06234";

/// Creates a member entity model with default values and a full address.
///
/// # Returns
/// - `member::Model` - In-memory member entity with id `1`
pub fn entity() -> member::Model {
    member::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        city: Some(DEFAULT_CITY.to_string()),
        street: Some(DEFAULT_STREET.to_string()),
        zipcode: Some(DEFAULT_ZIPCODE.to_string()),
    }
}

/// Creates a member entity model without an address.
pub fn entity_without_address() -> member::Model {
    member::Model {
        city: None,
        street: None,
        zipcode: None,
        ..entity()
    }
}
