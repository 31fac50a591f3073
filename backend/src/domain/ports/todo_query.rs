//! Driving port for todo reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, Todo};

/// Flattened read snapshot of a todo for boundary transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    /// Durable identifier.
    pub id: Uuid,
    /// Current title.
    pub title: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoPayload {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id(),
            title: value.title().as_ref().to_owned(),
            is_completed: value.is_completed(),
            created_at: value.created_at(),
        }
    }
}

/// Request to read a single todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTodoRequest {
    /// Identifier of the todo to read.
    pub todo_id: Uuid,
}

/// Response from reading a single todo.
///
/// `todo` is `None` when no record matches; absence is not an error at this
/// layer, the boundary decides how to surface it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTodoResponse {
    /// Matching snapshot, if any.
    pub todo: Option<TodoPayload>,
}

/// Response from listing todos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosResponse {
    /// Snapshots ordered by creation time, most recent first.
    pub todos: Vec<TodoPayload>,
}

/// Driving port for todo read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// List every todo, most recently created first.
    async fn list_todos(&self) -> Result<ListTodosResponse, Error>;

    /// Read one todo; absence is reported as `None`, not as an error.
    async fn get_todo(&self, request: GetTodoRequest) -> Result<GetTodoResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTodoQuery;

#[async_trait]
impl TodoQuery for FixtureTodoQuery {
    async fn list_todos(&self) -> Result<ListTodosResponse, Error> {
        Ok(ListTodosResponse { todos: Vec::new() })
    }

    async fn get_todo(&self, _request: GetTodoRequest) -> Result<GetTodoResponse, Error> {
        Ok(GetTodoResponse { todo: None })
    }
}
