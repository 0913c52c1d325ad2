//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Business rules that belong to a single aggregate (stock adjustment, order creation,
//! cancellation) live on these types.

pub mod item;
pub mod member;
pub mod order;
