//! Item factory for creating test catalog entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::ItemType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// Builds a book by default; `album` and `movie` switch the discriminator and fill
/// the matching kind-specific columns.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let book = ItemFactory::new(&db)
///     .name("JPA")
///     .price(10000)
///     .stock_quantity(10)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    dtype: ItemType,
    name: String,
    price: i32,
    stock_quantity: i32,
    first: String,
    second: String,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - kind: book by `"Author {id}"` with isbn `"isbn-{id}"`
    /// - name: `"Item {id}"`
    /// - price: `10000`
    /// - stock_quantity: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dtype: ItemType::Book,
            name: format!("Item {}", id),
            price: 10000,
            stock_quantity: 10,
            first: format!("Author {}", id),
            second: format!("isbn-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    pub fn book(mut self, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        self.dtype = ItemType::Book;
        self.first = author.into();
        self.second = isbn.into();
        self
    }

    pub fn album(mut self, artist: impl Into<String>, etc: impl Into<String>) -> Self {
        self.dtype = ItemType::Album;
        self.first = artist.into();
        self.second = etc.into();
        self
    }

    pub fn movie(mut self, director: impl Into<String>, actor: impl Into<String>) -> Self {
        self.dtype = ItemType::Movie;
        self.first = director.into();
        self.second = actor.into();
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        let mut model = entity::item::ActiveModel {
            dtype: ActiveValue::Set(self.dtype),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            stock_quantity: ActiveValue::Set(self.stock_quantity),
            ..Default::default()
        };

        match self.dtype {
            ItemType::Book => {
                model.author = ActiveValue::Set(Some(self.first));
                model.isbn = ActiveValue::Set(Some(self.second));
            }
            ItemType::Album => {
                model.artist = ActiveValue::Set(Some(self.first));
                model.etc = ActiveValue::Set(Some(self.second));
            }
            ItemType::Movie => {
                model.director = ActiveValue::Set(Some(self.first));
                model.actor = ActiveValue::Set(Some(self.second));
            }
        }

        model.insert(self.db).await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `ItemFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).build().await
}
