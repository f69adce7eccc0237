//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todoapp_core::todo::{validate_description, validate_title};
use todoapp_core::types::{DbId, Timestamp};
use validator::Validate;

/// A todo row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo.
///
/// The title is stored trimmed; `completed` and both timestamps come from
/// the column defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(custom(function = validate_title))]
    pub title: String,
    #[validate(custom(function = validate_description))]
    pub description: Option<String>,
}

/// DTO for updating an existing todo. All fields are optional; a field
/// absent from the request body leaves the stored value untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(custom(function = validate_title))]
    pub title: Option<String>,
    #[validate(custom(function = validate_description))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Query parameters for `GET /api/todos`.
///
/// Values are clamped in the repository layer via `clamp_skip` /
/// `clamp_limit`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListTodosParams {
    /// Number of items to skip. Defaults to 0.
    pub skip: Option<i64>,
    /// Maximum number of items to return. Defaults to 100, capped at 1000.
    pub limit: Option<i64>,
}

/// Response shape for `GET /api/todos`: one page of todos plus the total
/// row count and the effective pagination values.
#[derive(Debug, Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
