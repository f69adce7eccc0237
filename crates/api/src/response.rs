//! Shared response types for API handlers.

use serde::Serialize;

/// Confirmation payload for operations that do not return an entity,
/// e.g. `DELETE /api/todos/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
