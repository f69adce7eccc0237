//! Handlers for the `/todos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todoapp_core::error::CoreError;
use todoapp_core::types::DbId;
use todoapp_db::models::todo::{CreateTodo, ListTodosParams, Todo, TodoList, UpdateTodo};
use todoapp_db::repositories::todo_repo::{clamp_limit, clamp_skip};
use todoapp_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/todos
///
/// Rejects a duplicate title (exact, case-sensitive match on the trimmed
/// title) before inserting. The pre-check is racy on its own; the
/// `uq_todos_title` constraint closes the race and maps to the same
/// conflict error.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let existing = TodoRepo::find_by_title(&state.pool, input.title.trim()).await?;
    if existing.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Todo with this title already exists".to_string(),
        )));
    }

    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos
///
/// Paginated listing. `skip` defaults to 0, `limit` defaults to 100 and is
/// silently clamped to 1000. `total` counts all rows, ignoring pagination.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListTodosParams>,
) -> AppResult<Json<TodoList>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit);

    let todos = TodoRepo::list(&state.pool, skip, limit).await?;
    let total = TodoRepo::count(&state.pool).await?;

    Ok(Json(TodoList {
        todos,
        total,
        skip,
        limit,
    }))
}

/// GET /api/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// PUT /api/todos/{id}
///
/// Partial update: only fields present in the body change; `updated_at`
/// is refreshed on every successful call.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
///
/// Hard delete. Returns a confirmation message naming the deleted id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(MessageResponse {
        message: format!("Todo with id {id} deleted successfully"),
    }))
}
