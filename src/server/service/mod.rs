//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules
//! that need the database (unique member names, existence checks), drive the domain
//! models, and own transaction boundaries: every mutating operation runs in its own
//! transaction that is committed on success and rolled back on any error.

use sea_orm::{DatabaseTransaction, DbErr};

use crate::server::error::AppError;

pub mod item;
pub mod member;
pub mod order;


/// Rolls back `txn` after `err` aborted it and hands `err` back to the caller.
async fn abort(txn: DatabaseTransaction, err: AppError) -> AppError {
    keep_cause(err, txn.rollback().await)
}

/// A failed rollback is logged; the error that aborted the transaction is kept.
fn keep_cause(err: AppError, rollback: Result<(), DbErr>) -> AppError {
    if let Err(rollback_err) = rollback {
        tracing::error!(error = %rollback_err, cause = %err, "Failed to roll back transaction");
    }

    err
}
