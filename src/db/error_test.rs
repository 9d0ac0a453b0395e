//! Tests for database error types.

use crate::db::DbError;

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Todo".to_string(),
        id: "abc12345".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Todo with id 'abc12345'");
}

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "title is required".to_string(),
    };
    assert_eq!(err.to_string(), "Validation error: title is required");
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "query failed".to_string(),
    };
    assert_eq!(err.to_string(), "Store error: query failed");
}

#[test]
fn schema_error_displays_correctly() {
    let err = DbError::Schema {
        message: "failed to define table".to_string(),
    };
    assert_eq!(err.to_string(), "Schema error: failed to define table");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open store".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open store");
}
