//! HTTP request handlers.
//!
//! `api` holds the JSON endpoints documented with utoipa. The remaining modules serve
//! the server-rendered pages: they parse form posts, call a service, and either render
//! a view or redirect.

pub mod api;
pub mod home;
pub mod item;
pub mod member;
pub mod order;

use axum::http::StatusCode;

use crate::server::error::AppError;

/// Splits errors a user can fix by resubmitting a form from the rest.
///
/// Bad input and business rule violations become a status and message to show on the
/// re-rendered form; anything else is returned for the normal error response.
pub(crate) fn form_rejection(err: AppError) -> Result<(StatusCode, String), AppError> {
    match err {
        AppError::BadRequest(message) => Ok((StatusCode::BAD_REQUEST, message)),
        AppError::DomainErr(err) => Ok((StatusCode::CONFLICT, err.to_string())),
        err => Err(err),
    }
}
