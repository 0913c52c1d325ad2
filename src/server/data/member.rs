//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for creating, renaming, and querying
//! members. Entity models are converted to `Member` domain models at this boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::member::{Address, CreateMemberParam, Member, UpdateMemberParam};

/// Repository providing database operations for members.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// transaction.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member.
    ///
    /// # Arguments
    /// - `param` - Name and optional address of the member
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its generated id
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let (city, street, zipcode) = Address::into_columns(param.address);

        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(param.name),
            city: ActiveValue::Set(city),
            street: ActiveValue::Set(street),
            zipcode: ActiveValue::Set(zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Gets every member ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Finds members whose name matches exactly.
    ///
    /// Names are unique, so the result holds at most one member once the unique index
    /// exists; the list form lets callers use it as an existence check.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::Name.eq(name))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Renames a member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member renamed
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateMemberParam) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::member::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(param.name);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }
}
