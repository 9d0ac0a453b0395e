//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTodoRequest, CreateTodoResponse, ErrorResponse, HealthResponse, MessageResponse,
    TodoListResponse, TodoResponse, UpdateTodoRequest,
};
use super::state::AppState;
use super::static_assets;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "CRUD API over a single todo collection",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::list_todos,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            TodoListResponse,
            CreateTodoRequest,
            CreateTodoResponse,
            UpdateTodoRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todos", description = "Todo item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // Home page and system routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(static_assets::home))
        .route("/health", get(handlers::health));

    // Todo routes (generic over Database)
    let todo_routes = routes!(D => {
        get "/todo/" => handlers::list_todos,
        post "/todo/" => handlers::create_todo,
        put "/todo/{id}" => handlers::update_todo,
        delete "/todo/{id}" => handlers::delete_todo,
    });

    system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
