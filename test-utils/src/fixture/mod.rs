//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit testing entity-to-domain conversion and domain rules.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//! let book = fixture::item::book_entity();
//! ```

pub mod item;
pub mod member;
