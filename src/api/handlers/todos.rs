//! Todo item handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, DbError, Todo, TodoRepository};

// =============================================================================
// DTOs
// =============================================================================

/// Todo response DTO
#[derive(Serialize, ToSchema)]
pub struct TodoResponse {
    /// Store-generated identifier
    #[schema(example = "x7qz2m4kfyp0vj8tnw1s")]
    pub id: String,
    /// Todo title
    #[schema(example = "Buy milk")]
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp
    #[schema(example = "2025-01-01 00:00:00")]
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            created_at: t.created_at,
        }
    }
}

/// List response DTO - every stored todo under a `data` key
#[derive(Serialize, ToSchema)]
pub struct TodoListResponse {
    pub data: Vec<TodoResponse>,
}

/// Create todo request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Todo title (must be non-empty)
    #[schema(example = "Buy milk")]
    pub title: String,
}

/// Create todo response DTO
#[derive(Serialize, ToSchema)]
pub struct CreateTodoResponse {
    #[schema(example = "todo created successfully")]
    pub message: String,
    /// Identifier of the new todo
    #[schema(example = "x7qz2m4kfyp0vj8tnw1s")]
    pub todo_id: String,
}

/// Update todo request DTO (only the provided fields change)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    /// New title
    #[schema(example = "Buy oat milk")]
    pub title: Option<String>,
    /// New completion flag
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    fn merge_into(self, target: &mut Todo) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(completed) = self.completed {
            target.completed = completed;
        }
    }
}

/// Success message DTO
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "todo updated successfully")]
    pub message: String,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Todo not found")]
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
///
/// Returns every stored todo under a `data` key
#[utoipa::path(
    get,
    path = "/todo/",
    tag = "todos",
    responses(
        (status = 200, description = "All stored todos", body = TodoListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<TodoListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let todos = state.db().todos().list().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let data = todos.into_iter().map(TodoResponse::from).collect();

    Ok(Json(TodoListResponse { data }))
}

/// Create a new todo
///
/// The store generates the identifier; `completed` starts false and the
/// creation timestamp is set server-side
#[utoipa::path(
    post,
    path = "/todo/",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = CreateTodoResponse),
        (status = 400, description = "Missing or empty title", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<CreateTodoResponse>), (StatusCode, Json<ErrorResponse>)> {
    if req.title.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "title is required".to_string(),
            }),
        ));
    }

    // Create with placeholder id/timestamp - the repository fills both in
    let todo = Todo {
        id: String::new(),
        title: req.title,
        completed: false,
        created_at: String::new(),
    };

    let created = state.db().todos().create(&todo).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTodoResponse {
            message: "todo created successfully".to_string(),
            todo_id: created.id,
        }),
    ))
}

/// Update a todo
///
/// Fetches the todo by id, merges the provided fields, and writes it back
#[utoipa::path(
    put,
    path = "/todo/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = MessageResponse),
        (status = 400, description = "Empty title", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The title invariant holds across the whole lifecycle, not just at
    // creation.
    if req.title.as_deref() == Some("") {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "title is required".to_string(),
            }),
        ));
    }

    let mut todo = state.db().todos().get(&id).await.map_err(|e| match e {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo '{}' not found", id),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    req.merge_into(&mut todo);

    state.db().todos().update(&todo).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(MessageResponse {
        message: "todo updated successfully".to_string(),
    }))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todo/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.db().todos().delete(&id).await.map_err(|e| match e {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo '{}' not found", id),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    Ok(Json(MessageResponse {
        message: "todo deleted successfully".to_string(),
    }))
}
