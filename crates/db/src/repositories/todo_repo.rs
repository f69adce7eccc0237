//! Repository for the `todos` table.

use sqlx::PgPool;
use todoapp_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Default page size for todo listing.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for todo listing. Larger requests are clamped, not
/// rejected.
pub const MAX_LIMIT: i64 = 1000;

/// Effective `skip` value: defaults to 0, negative values are floored at 0.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Effective `limit` value: defaults to [`DEFAULT_LIMIT`], clamped into
/// `[0, MAX_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
}

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// The title is stored trimmed. `completed` and both timestamps come
    /// from the column defaults, so `created_at == updated_at` on the
    /// returned row. A duplicate title violates `uq_todos_title`.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a todo by exact title (case-sensitive). Used by the
    /// duplicate-title pre-check on create.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE title = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List one page of todos in insertion order (ascending id).
    ///
    /// Callers pass already-clamped values from [`clamp_skip`] /
    /// [`clamp_limit`].
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Count all todos, ignoring pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await
    }

    /// Update a todo. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed whenever the row matches.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                completed = COALESCE($4, completed),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_defaults_to_zero() {
        assert_eq!(clamp_skip(None), 0);
    }

    #[test]
    fn negative_skip_is_floored() {
        assert_eq!(clamp_skip(Some(-5)), 0);
    }

    #[test]
    fn limit_defaults_to_100() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn limit_above_max_is_clamped_not_rejected() {
        assert_eq!(clamp_limit(Some(5000)), MAX_LIMIT);
        assert_eq!(clamp_limit(Some(MAX_LIMIT)), MAX_LIMIT);
    }

    #[test]
    fn negative_limit_is_floored() {
        assert_eq!(clamp_limit(Some(-1)), 0);
    }
}
