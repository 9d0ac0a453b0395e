//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive
//! macros. The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(todos::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(todos::db::validation_error))]
    Validation { message: String },

    #[error("Store error: {message}")]
    #[diagnostic(code(todos::db::store_error))]
    Database { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(todos::db::schema_error))]
    Schema { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(todos::db::connection_error))]
    Connection { message: String },
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
