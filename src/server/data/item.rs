//! Item data repository for database operations.
//!
//! Items of every kind live in the single `item` table; the `dtype` column and the
//! kind-specific nullable columns are mapped to and from `ItemKind` here.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::item::{CreateItemParam, Item, ItemKind, UpdateItemParam};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new item of any kind.
    pub async fn create(&self, param: CreateItemParam) -> Result<Item, DbErr> {
        let mut active_model = entity::item::ActiveModel {
            dtype: ActiveValue::Set(param.kind.item_type()),
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            stock_quantity: ActiveValue::Set(param.stock_quantity),
            ..Default::default()
        };
        set_kind_columns(&mut active_model, param.kind);

        let entity = active_model.insert(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets every item ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets the items with the given ids in one query.
    ///
    /// Ids with no matching item are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Item>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Replaces an item's name, price, stock and kind-specific attributes.
    ///
    /// The `dtype` column is left as stored.
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - Item updated
    /// - `Ok(None)` - No item with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateItemParam) -> Result<Option<Item>, DbErr> {
        let Some(entity) = entity::prelude::Item::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::item::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.price = ActiveValue::Set(param.price);
        active_model.stock_quantity = ActiveValue::Set(param.stock_quantity);
        set_kind_columns(&mut active_model, param.kind);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Item::from_entity(entity)))
    }

    /// Writes the current stock of an item after it was adjusted in memory.
    pub async fn update_stock(&self, item: &Item) -> Result<(), DbErr> {
        entity::item::ActiveModel {
            id: ActiveValue::Unchanged(item.id),
            stock_quantity: ActiveValue::Set(item.stock_quantity),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}

/// Writes the kind-specific columns, clearing the ones other kinds use.
fn set_kind_columns(active_model: &mut entity::item::ActiveModel, kind: ItemKind) {
    let (author, isbn, artist, etc, director, actor) = match kind {
        ItemKind::Book { author, isbn } => (Some(author), Some(isbn), None, None, None, None),
        ItemKind::Album { artist, etc } => (None, None, Some(artist), Some(etc), None, None),
        ItemKind::Movie { director, actor } => {
            (None, None, None, None, Some(director), Some(actor))
        }
    };

    active_model.author = ActiveValue::Set(author);
    active_model.isbn = ActiveValue::Set(isbn);
    active_model.artist = ActiveValue::Set(artist);
    active_model.etc = ActiveValue::Set(etc);
    active_model.director = ActiveValue::Set(director);
    active_model.actor = ActiveValue::Set(actor);
}
