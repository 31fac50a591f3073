//! Domain layer: entities, errors, ports, and application services.

mod error;
pub mod ports;
mod todo;
mod todo_service;
mod trace_id;

pub use error::{Error, ErrorCode};
pub use todo::{Todo, TodoDraft, TodoTitle, TodoValidationError};
pub use todo_service::{TodoCommandService, TodoQueryService};
pub use trace_id::{TRACE_ID_HEADER, TraceId};
