//! Driving port for todo mutations.
//!
//! Write responses carry a [`WriteOutcome`] so boundaries can tell a missing
//! record apart from a failed backend without inspecting error messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::ports::WriteOutcome;

/// Request to create a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// Title of the new todo; must not be blank.
    pub title: String,
    /// Optional owner identifier reserved for future ownership scoping.
    pub user_id: Option<Uuid>,
}

/// Response from creating a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoResponse {
    /// Durable identifier of the persisted record, which may be
    /// backend-assigned.
    pub todo_id: Uuid,
}

/// Request to update an existing todo.
///
/// Absent fields leave the stored value untouched; `is_completed` is
/// tri-state so an explicit `false` is distinguishable from "unchanged".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// Identifier of the todo to update.
    pub todo_id: Uuid,
    /// Replacement title, when present; must not be blank.
    pub title: Option<String>,
    /// Replacement completion flag, when present.
    pub is_completed: Option<bool>,
}

/// Response from updating a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTodoResponse {
    /// Whether the update reached an existing record.
    pub outcome: WriteOutcome,
}

/// Request to delete a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoRequest {
    /// Identifier of the todo to delete.
    pub todo_id: Uuid,
}

/// Response from deleting a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoResponse {
    /// Whether the delete reached an existing record.
    pub outcome: WriteOutcome,
}

/// Request to flip a todo's completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTodoCompletionRequest {
    /// Identifier of the todo to toggle.
    pub todo_id: Uuid,
}

/// Response from toggling a todo's completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTodoCompletionResponse {
    /// Whether the toggle reached an existing record.
    pub outcome: WriteOutcome,
}

/// Driving port for todo write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Create a todo and return its durable identifier.
    ///
    /// Fails with a validation error before any persistence call when the
    /// title is blank.
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse, Error>;

    /// Apply the present fields of the request to an existing todo.
    async fn update_todo(&self, request: UpdateTodoRequest) -> Result<UpdateTodoResponse, Error>;

    /// Delete a todo.
    async fn delete_todo(&self, request: DeleteTodoRequest) -> Result<DeleteTodoResponse, Error>;

    /// Flip the completion flag of an existing todo.
    async fn toggle_todo_completion(
        &self,
        request: ToggleTodoCompletionRequest,
    ) -> Result<ToggleTodoCompletionResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Creates validate and echo a fresh identifier; targeted writes report
/// [`WriteOutcome::NotFound`], matching an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTodoCommand;

#[async_trait]
impl TodoCommand for FixtureTodoCommand {
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse, Error> {
        let todo = crate::domain::Todo::create(request.title, request.user_id)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(CreateTodoResponse { todo_id: todo.id() })
    }

    async fn update_todo(&self, _request: UpdateTodoRequest) -> Result<UpdateTodoResponse, Error> {
        Ok(UpdateTodoResponse {
            outcome: WriteOutcome::NotFound,
        })
    }

    async fn delete_todo(&self, _request: DeleteTodoRequest) -> Result<DeleteTodoResponse, Error> {
        Ok(DeleteTodoResponse {
            outcome: WriteOutcome::NotFound,
        })
    }

    async fn toggle_todo_completion(
        &self,
        _request: ToggleTodoCompletionRequest,
    ) -> Result<ToggleTodoCompletionResponse, Error> {
        Ok(ToggleTodoCompletionResponse {
            outcome: WriteOutcome::NotFound,
        })
    }
}
