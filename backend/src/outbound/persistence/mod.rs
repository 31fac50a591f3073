//! Persistence adapters implementing the todo repository port.
//!
//! Two interchangeable implementations exist:
//!
//! - [`DieselTodoRepository`]: PostgreSQL via the Diesel ORM with async
//!   support through `diesel-async` and `bb8` connection pooling. Thin by
//!   design: it only translates between Diesel rows and domain entities and
//!   maps database errors to the port's error type. Row structs
//!   (`models.rs`) and table definitions (`schema.rs`) stay internal.
//! - [`InMemoryTodoRepository`]: mutex-guarded store used when no database
//!   is configured and by handler-level tests.

mod diesel_todo_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use memory::InMemoryTodoRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
