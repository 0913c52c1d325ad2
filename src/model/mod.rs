//! Data transfer objects shared by the REST API and the HTML forms.
//!
//! DTOs are decoupled from entities and domain models: they define the wire shape
//! of requests and responses, derive serde and `ToSchema`, and carry no behavior.

pub mod api;
pub mod item;
pub mod member;
pub mod order;
