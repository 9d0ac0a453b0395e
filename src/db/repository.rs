//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. The
//! methods return `Send` futures so handlers generic over the backend
//! can run on the multi-threaded runtime.

use std::future::Future;

use crate::db::{DbResult, models::Todo};

/// Repository for Todo operations.
pub trait TodoRepository {
    /// Persist a new todo. The store generates the identifier and the
    /// creation timestamp; any values present on the input are ignored.
    fn create(&self, todo: &Todo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by id.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get all todos, oldest first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Write back an existing todo's mutable fields.
    fn update(&self, todo: &Todo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Delete a todo by id.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Repositories are exposed via associated types, avoiding dynamic
/// dispatch.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository + Send + Sync
    where
        Self: 'a;

    /// Define the todo table.
    fn define_schema(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
