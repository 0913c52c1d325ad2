//! Member service for signup and member management.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use super::abort;
use crate::server::{
    data::member::MemberRepository,
    error::{domain::DomainError, AppError},
    model::member::{CreateMemberParam, Member, UpdateMemberParam},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// # Arguments
    /// - `param` - Name and optional address
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new member
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::DomainErr(DuplicateMember))` - Name already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn join(&self, mut param: CreateMemberParam) -> Result<i32, AppError> {
        param.name = validate_name(&param.name)?;

        let txn = self.db.begin().await?;
        match Self::insert_member(&txn, param).await {
            Ok(member) => {
                txn.commit().await?;
                tracing::info!(member_id = member.id, name = %member.name, "Member joined");
                Ok(member.id)
            }
            Err(err) => Err(abort(txn, err).await),
        }
    }

    async fn insert_member(
        txn: &DatabaseTransaction,
        param: CreateMemberParam,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(txn);

        if !member_repo.find_by_name(&param.name).await?.is_empty() {
            return Err(DomainError::DuplicateMember(param.name).into());
        }

        let name = param.name.clone();
        member_repo
            .create(param)
            .await
            .map_err(|err| duplicate_or_db(err, name))
    }

    /// Gets every member ordered by id.
    pub async fn find_members(&self) -> Result<Vec<Member>, AppError> {
        Ok(MemberRepository::new(self.db).find_all().await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<Member>, AppError> {
        Ok(MemberRepository::new(self.db).find_by_id(id).await?)
    }

    /// Renames a member.
    ///
    /// Renaming a member to its current name succeeds without a conflict.
    ///
    /// # Returns
    /// - `Ok(Member)` - The renamed member
    /// - `Err(AppError::NotFound)` - No member with that id
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::DomainErr(DuplicateMember))` - Another member has the name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, mut param: UpdateMemberParam) -> Result<Member, AppError> {
        param.name = validate_name(&param.name)?;

        let txn = self.db.begin().await?;
        match Self::rename_member(&txn, param).await {
            Ok(member) => {
                txn.commit().await?;
                tracing::info!(member_id = member.id, name = %member.name, "Member renamed");
                Ok(member)
            }
            Err(err) => Err(abort(txn, err).await),
        }
    }

    async fn rename_member(
        txn: &DatabaseTransaction,
        param: UpdateMemberParam,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(txn);

        let taken = member_repo
            .find_by_name(&param.name)
            .await?
            .iter()
            .any(|member| member.id != param.id);
        if taken {
            return Err(DomainError::DuplicateMember(param.name).into());
        }

        let id = param.id;
        let name = param.name.clone();
        member_repo
            .update(param)
            .await
            .map_err(|err| duplicate_or_db(err, name))?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Member name must not be empty".to_string()));
    }

    Ok(name.to_string())
}

/// Reports a unique violation on the name column as a duplicate member.
///
/// Covers a concurrent signup that inserted the same name after our check.
fn duplicate_or_db(err: DbErr, name: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateMember(name).into(),
        _ => AppError::DbErr(err),
    }
}
