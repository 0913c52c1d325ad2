//! Item domain models and parameters.
//!
//! Items form a small hierarchy (book, album, movie) stored in a single table.
//! Stock adjustment rules live on `Item`.

use entity::sea_orm_active_enums::ItemType;

use crate::{model::item::BookFormDto, server::error::domain::DomainError};

/// Kind-specific attributes of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Book { author: String, isbn: String },
    Album { artist: String, etc: String },
    Movie { director: String, actor: String },
}

impl ItemKind {
    /// Discriminator stored in the `dtype` column.
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Book { .. } => ItemType::Book,
            Self::Album { .. } => ItemType::Album,
            Self::Movie { .. } => ItemType::Movie,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Book { .. } => "Book",
            Self::Album { .. } => "Album",
            Self::Movie { .. } => "Movie",
        }
    }
}

/// Catalog item with price and stock.
///
/// `stock_quantity` never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub kind: ItemKind,
}

impl Item {
    /// Converts an entity model to an item domain model at the repository boundary.
    ///
    /// Missing kind-specific columns are read as empty strings.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        let kind = match entity.dtype {
            ItemType::Book => ItemKind::Book {
                author: entity.author.unwrap_or_default(),
                isbn: entity.isbn.unwrap_or_default(),
            },
            ItemType::Album => ItemKind::Album {
                artist: entity.artist.unwrap_or_default(),
                etc: entity.etc.unwrap_or_default(),
            },
            ItemType::Movie => ItemKind::Movie {
                director: entity.director.unwrap_or_default(),
                actor: entity.actor.unwrap_or_default(),
            },
        };

        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            stock_quantity: entity.stock_quantity,
            kind,
        }
    }

    /// Returns units to stock.
    ///
    /// # Returns
    /// - `Ok(())` - Stock incremented by `quantity`
    /// - `Err(DomainError::StockOverflow)` - The new stock would not fit in an `i32`;
    ///   stock is left unchanged
    pub fn add_stock(&mut self, quantity: i32) -> Result<(), DomainError> {
        self.stock_quantity = self.stock_quantity.checked_add(quantity).ok_or(
            DomainError::StockOverflow {
                item_id: self.id,
                returned: quantity,
                available: self.stock_quantity,
            },
        )?;

        Ok(())
    }

    /// Takes units out of stock.
    ///
    /// # Returns
    /// - `Ok(())` - Stock decremented by `quantity`
    /// - `Err(DomainError::NotEnoughStock)` - Fewer than `quantity` units available;
    ///   stock is left unchanged
    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), DomainError> {
        let rest = self.stock_quantity - quantity;
        if rest < 0 {
            return Err(DomainError::NotEnoughStock {
                item_id: self.id,
                requested: quantity,
                available: self.stock_quantity,
            });
        }

        self.stock_quantity = rest;
        Ok(())
    }
}

/// Parameters for adding an item to the catalog.
#[derive(Debug, Clone)]
pub struct CreateItemParam {
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub kind: ItemKind,
}

impl CreateItemParam {
    pub fn book_from_form(form: BookFormDto) -> Self {
        Self {
            name: form.name,
            price: form.price,
            stock_quantity: form.stock_quantity,
            kind: ItemKind::Book {
                author: form.author,
                isbn: form.isbn,
            },
        }
    }
}

/// Parameters for replacing an item's attributes.
///
/// The kind must match the stored item; an item never changes kind.
#[derive(Debug, Clone)]
pub struct UpdateItemParam {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub kind: ItemKind,
}

impl UpdateItemParam {
    pub fn book_from_form(id: i32, form: BookFormDto) -> Self {
        Self {
            id,
            name: form.name,
            price: form.price,
            stock_quantity: form.stock_quantity,
            kind: ItemKind::Book {
                author: form.author,
                isbn: form.isbn,
            },
        }
    }
}
