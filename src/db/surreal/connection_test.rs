//! Tests for SurrealDB connection and schema management.

use tempfile::tempdir;

use crate::db::{Database, DbError, SurrealDatabase, Todo, TodoRepository};

#[tokio::test]
async fn in_memory_store_connects() {
    let db = SurrealDatabase::in_memory().await.expect("connect");
    db.define_schema().await.expect("define schema");
}

#[tokio::test]
async fn define_schema_is_idempotent() {
    let db = SurrealDatabase::in_memory().await.expect("connect");
    db.define_schema().await.expect("first define");
    db.define_schema().await.expect("second define");
}

#[tokio::test]
async fn unknown_engine_scheme_is_a_connection_error() {
    let err = SurrealDatabase::connect("bogus://nowhere")
        .await
        .expect_err("bogus scheme must not connect");
    assert!(matches!(err, DbError::Connection { .. }));
}

#[tokio::test]
async fn on_disk_store_accepts_writes() {
    let dir = tempdir().expect("tempdir");
    let url = format!("surrealkv://{}", dir.path().join("todos.skv").display());

    let db = SurrealDatabase::connect(&url).await.expect("connect");
    db.define_schema().await.expect("define schema");

    let created = db
        .todos()
        .create(&Todo {
            id: String::new(),
            title: "persisted".to_string(),
            completed: false,
            created_at: String::new(),
        })
        .await
        .expect("create");

    let todos = db.todos().list().await.expect("list");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, created.id);
}
