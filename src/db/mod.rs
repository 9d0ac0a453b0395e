//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends to be swapped without changing
//! the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Todo)
//! - `repository`: Trait definitions for data access
//! - `surreal`: SurrealDB implementation of the traits

mod error;
mod models;
mod repository;
pub mod surreal;
pub mod utils;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use surreal::SurrealDatabase;
