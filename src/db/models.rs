//! Domain models for the todo store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Store-generated record key rendered as a string.
pub type Id = String;

/// A single todo item.
///
/// `created_at` is set once by the repository at creation and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Id,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}
