//! Tests for the SurrealDB todo repository.

use crate::db::{Database, DbError, SurrealDatabase, Todo, TodoRepository};

async fn test_db() -> SurrealDatabase {
    let db = SurrealDatabase::in_memory()
        .await
        .expect("Failed to create test store");
    db.define_schema().await.expect("Failed to define schema");
    db
}

/// A todo as handlers hand it to the repository: id and timestamp are
/// placeholders for the store to fill in.
fn draft(title: &str) -> Todo {
    Todo {
        id: String::new(),
        title: title.to_string(),
        completed: false,
        created_at: String::new(),
    }
}

#[tokio::test]
async fn create_generates_id_and_timestamp() {
    let db = test_db().await;

    let created = db.todos().create(&draft("write tests")).await.unwrap();

    assert!(!created.id.is_empty());
    assert!(!created.created_at.is_empty());
    assert_eq!(created.title, "write tests");
    assert!(!created.completed);
}

#[tokio::test]
async fn created_todo_is_retrievable_by_id() {
    let db = test_db().await;

    let created = db.todos().create(&draft("find me")).await.unwrap();
    let fetched = db.todos().get(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let db = test_db().await;

    let todos = db.todos().list().await.unwrap();

    assert!(todos.is_empty());
}

#[tokio::test]
async fn list_returns_all_created_todos() {
    let db = test_db().await;

    db.todos().create(&draft("first")).await.unwrap();
    db.todos().create(&draft("second")).await.unwrap();

    let todos = db.todos().list().await.unwrap();
    let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(todos.len(), 2);
    assert!(titles.contains(&"first"));
    assert!(titles.contains(&"second"));
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let db = test_db().await;

    let err = db.todos().get("does-not-exist").await.unwrap_err();

    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test]
async fn update_writes_back_mutable_fields() {
    let db = test_db().await;

    let mut todo = db.todos().create(&draft("original")).await.unwrap();
    todo.title = "renamed".to_string();
    todo.completed = true;

    let updated = db.todos().update(&todo).await.unwrap();

    assert_eq!(updated.title, "renamed");
    assert!(updated.completed);
    // Creation timestamp is immutable.
    assert_eq!(updated.created_at, todo.created_at);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let db = test_db().await;

    let mut ghost = draft("ghost");
    ghost.id = "does-not-exist".to_string();

    let err = db.todos().update(&ghost).await.unwrap_err();

    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let db = test_db().await;

    let created = db.todos().create(&draft("short-lived")).await.unwrap();
    db.todos().delete(&created.id).await.unwrap();

    let todos = db.todos().list().await.unwrap();
    assert!(todos.is_empty());

    let err = db.todos().get(&created.id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let db = test_db().await;

    let err = db.todos().delete("does-not-exist").await.unwrap_err();

    assert!(matches!(err, DbError::NotFound { .. }));
}
