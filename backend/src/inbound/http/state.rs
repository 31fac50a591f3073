//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Driving port for todo mutations.
    pub todos: Arc<dyn TodoCommand>,
    /// Driving port for todo reads.
    pub todos_query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Construct state from the todo driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureTodoCommand, FixtureTodoQuery};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureTodoCommand), Arc::new(FixtureTodoQuery));
    /// let _todos = state.todos.clone();
    /// ```
    pub fn new(todos: Arc<dyn TodoCommand>, todos_query: Arc<dyn TodoQuery>) -> Self {
        Self { todos, todos_query }
    }
}
