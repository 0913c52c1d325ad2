//! Item service for catalog management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::item::ItemRepository,
    error::AppError,
    model::item::{CreateItemParam, Item, UpdateItemParam},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an item to the catalog.
    ///
    /// # Returns
    /// - `Ok(Item)` - The stored item
    /// - `Err(AppError::BadRequest)` - Blank name, or negative price or stock
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_item(&self, param: CreateItemParam) -> Result<Item, AppError> {
        validate(&param.name, param.price, param.stock_quantity)?;

        let item = ItemRepository::new(self.db).create(param).await?;
        tracing::info!(item_id = item.id, kind = item.kind.label(), "Item saved");

        Ok(item)
    }

    /// Replaces an item's attributes.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::BadRequest)` - Invalid values, or the kind differs from the stored one
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_item(&self, param: UpdateItemParam) -> Result<Item, AppError> {
        validate(&param.name, param.price, param.stock_quantity)?;

        let item_repo = ItemRepository::new(self.db);
        let existing = item_repo
            .find_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", param.id)))?;

        if existing.kind.item_type() != param.kind.item_type() {
            return Err(AppError::BadRequest(format!(
                "Item {} is a {} and cannot become a {}",
                existing.id,
                existing.kind.label(),
                param.kind.label()
            )));
        }

        let id = param.id;
        let item = item_repo
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;
        tracing::info!(item_id = item.id, "Item updated");

        Ok(item)
    }

    /// Gets every item ordered by id.
    pub async fn find_items(&self) -> Result<Vec<Item>, AppError> {
        Ok(ItemRepository::new(self.db).find_all().await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<Item>, AppError> {
        Ok(ItemRepository::new(self.db).find_by_id(id).await?)
    }
}

fn validate(name: &str, price: i32, stock_quantity: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Item name must not be empty".to_string()));
    }
    if price < 0 {
        return Err(AppError::BadRequest("Price must not be negative".to_string()));
    }
    if stock_quantity < 0 {
        return Err(AppError::BadRequest(
            "Stock quantity must not be negative".to_string(),
        ));
    }

    Ok(())
}
