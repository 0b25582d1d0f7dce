//! Route table for the todo API.

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{
    handlers::{
        AppState, create_todo, delete_todo, get_todo, health_check, list_todos, todo_stats,
        update_todo,
    },
    identity::authenticate,
};

/// Builds the application router.
///
/// Todo routes live under `/api/todos`; `/` answers a liveness banner.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let todos = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/stats", get(todo_stats))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/", get(health_check))
        .nest("/api", todos)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
