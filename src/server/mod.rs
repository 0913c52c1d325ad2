//! Shop backend: HTTP handlers, business logic, and data access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - JSON endpoints and server-rendered pages
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, state transitions, and parameter types
//! - **View Layer** (`view/`) - Dioxus components rendered to HTML
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** converts DTOs or form fields to params and calls a service
//! 3. **Service** opens a transaction when it writes, applies business rules
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the result to a DTO or renders a view

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod view;
