use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of shop business rules.
///
/// Raised by domain models and services. Each variant aborts the enclosing
/// transaction, so no partial state is persisted.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    /// A member with the same name is already registered.
    #[error("Member '{0}' already exists")]
    DuplicateMember(String),

    /// An order asked for more units than the item has in stock.
    #[error("Not enough stock for item {item_id}: requested {requested}, available {available}")]
    NotEnoughStock {
        item_id: i32,
        requested: i32,
        available: i32,
    },

    /// Returning units would push the item's stock past the largest storable quantity.
    #[error("Cannot return {returned} units to item {item_id}: stock of {available} would overflow")]
    StockOverflow {
        item_id: i32,
        returned: i32,
        available: i32,
    },

    /// The order's delivery is complete, so it can no longer be cancelled.
    #[error("Order {0} has already been delivered and cannot be cancelled")]
    AlreadyShipped(i32),

    /// The order was cancelled before.
    #[error("Order {0} is already cancelled")]
    AlreadyCancelled(i32),
}

/// Converts business rule violations into HTTP responses.
///
/// Every variant describes a request that conflicts with the current state of a
/// resource, so all map to 409 Conflict with the error message in the body.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
