//! SurrealDB TodoRepository implementation.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

use crate::db::utils::current_timestamp;
use crate::db::{DbError, DbResult, Todo, TodoRepository};

/// Row shape returned by the todo queries.
///
/// The record key is projected to a plain string with `record::id(id)`
/// so callers never deal with record id types.
#[derive(Debug, SurrealValue)]
struct TodoRecord {
    id: String,
    title: String,
    completed: bool,
    created_at: String,
}

impl From<TodoRecord> for Todo {
    fn from(r: TodoRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            completed: r.completed,
            created_at: r.created_at,
        }
    }
}

const FIELDS: &str = "record::id(id) AS id, title, completed, created_at";

/// SurrealDB-backed todo repository.
pub struct SurrealTodoRepository<'a> {
    pub(crate) db: &'a Surreal<Any>,
}

impl TodoRepository for SurrealTodoRepository<'_> {
    async fn create(&self, todo: &Todo) -> DbResult<Todo> {
        // The store generates the record key; the timestamp is always fresh.
        let created_at = current_timestamp();

        let mut response = self
            .db
            .query(format!(
                "SELECT {FIELDS} FROM \
                 (CREATE todo SET title = $title, completed = $completed, created_at = $created_at)"
            ))
            .bind(("title", todo.title.clone()))
            .bind(("completed", todo.completed))
            .bind(("created_at", created_at))
            .await
            .map_err(store_err)?;

        let mut rows = response.take::<Vec<TodoRecord>>(0).map_err(store_err)?;
        rows.pop().map(Todo::from).ok_or_else(|| DbError::Database {
            message: "create returned no record".to_string(),
        })
    }

    async fn get(&self, id: &str) -> DbResult<Todo> {
        let mut response = self
            .db
            .query(format!("SELECT {FIELDS} FROM type::thing('todo', $id)"))
            .bind(("id", id.to_string()))
            .await
            .map_err(store_err)?;

        let mut rows = response.take::<Vec<TodoRecord>>(0).map_err(store_err)?;
        rows.pop().map(Todo::from).ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> DbResult<Vec<Todo>> {
        let mut response = self
            .db
            .query(format!("SELECT {FIELDS} FROM todo ORDER BY created_at ASC"))
            .await
            .map_err(store_err)?;

        let rows = response.take::<Vec<TodoRecord>>(0).map_err(store_err)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, todo: &Todo) -> DbResult<Todo> {
        // Full-record write of the mutable fields; created_at is never
        // touched after creation. UPDATE on an unknown record id writes
        // nothing, which surfaces as NotFound.
        let mut response = self
            .db
            .query(format!(
                "SELECT {FIELDS} FROM \
                 (UPDATE type::thing('todo', $id) SET title = $title, completed = $completed)"
            ))
            .bind(("id", todo.id.clone()))
            .bind(("title", todo.title.clone()))
            .bind(("completed", todo.completed))
            .await
            .map_err(store_err)?;

        let mut rows = response.take::<Vec<TodoRecord>>(0).map_err(store_err)?;
        rows.pop().map(Todo::from).ok_or_else(|| not_found(&todo.id))
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let mut response = self
            .db
            .query(format!(
                "SELECT {FIELDS} FROM (DELETE type::thing('todo', $id) RETURN BEFORE)"
            ))
            .bind(("id", id.to_string()))
            .await
            .map_err(store_err)?;

        let rows = response.take::<Vec<TodoRecord>>(0).map_err(store_err)?;
        if rows.is_empty() {
            return Err(not_found(id));
        }

        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn store_err(e: impl std::fmt::Display) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

fn not_found(id: &str) -> DbError {
    DbError::NotFound {
        entity_type: "Todo".to_string(),
        id: id.to_string(),
    }
}
