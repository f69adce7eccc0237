//! Request handlers.
//!
//! Handlers delegate to the corresponding repository in `todoapp-db` and
//! map errors via [`crate::error::AppError`].

pub mod todos;
