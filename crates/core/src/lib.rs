//! Domain layer shared by the database and API crates.
//!
//! Holds the primitive type aliases, the domain error enum, and the todo
//! field constraints. No I/O happens here.

pub mod error;
pub mod todo;
pub mod types;

pub use error::CoreError;
