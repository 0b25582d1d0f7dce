//! HTTP handlers for the todo endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::DefaultClock;

use super::{
    dto::{CreateTodoRequest, ListTodosQuery, MessageResponse, TodoResponse, UpdateTodoRequest},
    error::ApiErrorResponse,
    identity::{Authenticator, Caller, TrustedHeaderAuthenticator},
};
use crate::todo::{
    domain::{TodoId, TodoStats},
    ports::TodoRepository,
    services::{AnonymousAccess, TodoAccessService, TodoStatisticsService},
};

/// Access service as wired into the HTTP layer.
pub type SharedAccessService = TodoAccessService<dyn TodoRepository, DefaultClock>;

/// Statistics service as wired into the HTTP layer.
pub type SharedStatisticsService = TodoStatisticsService<dyn TodoRepository>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped CRUD.
    pub access: SharedAccessService,
    /// Completion statistics.
    pub statistics: SharedStatisticsService,
    /// Caller identity resolution.
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Wires both services over one repository, trusting the default
    /// identity header.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, anonymous_access: AnonymousAccess) -> Self {
        Self {
            access: TodoAccessService::new(Arc::clone(&repository), Arc::new(DefaultClock))
                .with_anonymous_access(anonymous_access),
            statistics: TodoStatisticsService::new(repository)
                .with_anonymous_access(anonymous_access),
            authenticator: Arc::new(TrustedHeaderAuthenticator::default()),
        }
    }

    /// Replaces the authenticator.
    #[must_use]
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }
}

/// `GET /` liveness banner.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health_check() -> &'static str {
    "Todo API running"
}

/// `POST /todos`.
///
/// # Errors
///
/// Returns 400 for a malformed body, 401 without a caller, 500 when
/// persistence fails.
pub async fn create_todo(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiErrorResponse> {
    let Json(request) = payload?;
    let todo = state.access.create(caller.owner(), request.into()).await?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(&todo))))
}

/// `GET /todos`.
///
/// # Errors
///
/// Returns 400 for an undecodable query string, 401 for an anonymous call
/// under a denying policy, 500 when the query fails.
pub async fn list_todos(
    State(state): State<AppState>,
    caller: Caller,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<TodoResponse>>, ApiErrorResponse> {
    let Query(pairs) = query?;
    let filter = ListTodosQuery::from_pairs(pairs).into();
    let todos = state.access.list(caller.owner(), filter).await?;
    Ok(Json(todos.iter().map(TodoResponse::from).collect()))
}

/// `GET /todos/{id}`.
///
/// # Errors
///
/// Returns 404, 403, 401, or 500 as mapped from the service error.
pub async fn get_todo(
    State(state): State<AppState>,
    caller: Caller,
    Path(raw_id): Path<String>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    let id = parse_todo_id(&raw_id)?;
    let todo = state.access.get(caller.owner(), id).await?;
    Ok(Json(TodoResponse::from(&todo)))
}

/// `PUT`/`PATCH /todos/{id}`.
///
/// # Errors
///
/// Returns 400 for a malformed body; otherwise as [`get_todo`].
pub async fn update_todo(
    State(state): State<AppState>,
    caller: Caller,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiErrorResponse> {
    let id = parse_todo_id(&raw_id)?;
    let Json(request) = payload?;
    let todo = state
        .access
        .update(caller.owner(), id, request.into())
        .await?;
    Ok(Json(TodoResponse::from(&todo)))
}

/// `DELETE /todos/{id}`.
///
/// # Errors
///
/// As [`get_todo`].
pub async fn delete_todo(
    State(state): State<AppState>,
    caller: Caller,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let id = parse_todo_id(&raw_id)?;
    state.access.delete(caller.owner(), id).await?;
    Ok(Json(MessageResponse::new("Todo deleted")))
}

/// `GET /todos/stats`.
///
/// # Errors
///
/// Returns 401 for an anonymous call under a denying policy, 500 when any
/// count fails.
pub async fn todo_stats(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<TodoStats>, ApiErrorResponse> {
    let stats = state.statistics.compute(caller.owner()).await?;
    Ok(Json(stats))
}

// No record can carry an identifier that is not a UUID.
fn parse_todo_id(raw: &str) -> Result<TodoId, ApiErrorResponse> {
    raw.parse::<TodoId>()
        .map_err(|_| ApiErrorResponse::not_found("Todo not found"))
}
