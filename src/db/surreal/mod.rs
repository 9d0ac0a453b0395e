//! SurrealDB implementation of the database traits.
//!
//! This module provides a SurrealDB-backed implementation of the
//! repository traits defined in the parent module. The `any` engine is
//! used throughout, so the same code serves `surrealkv://` files in
//! production and `mem://` stores in tests.

mod connection;
mod todo;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod todo_test;

pub use connection::SurrealDatabase;
pub use todo::SurrealTodoRepository;
