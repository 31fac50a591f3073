//! Todo application services.
//!
//! These services implement the todo driving ports by composing entity
//! behaviour with repository calls. They are stateless orchestrators: each
//! use case performs at most one repository read followed by at most one
//! write, and nothing is retained between invocations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse, GetTodoRequest,
    GetTodoResponse, ListTodosResponse, TodoCommand, TodoPayload, TodoQuery, TodoRepository,
    TodoRepositoryError, ToggleTodoCompletionRequest, ToggleTodoCompletionResponse,
    UpdateTodoRequest, UpdateTodoResponse, WriteOutcome,
};
use crate::domain::{Error, Todo, TodoTitle};

fn map_repository_error(error: TodoRepositoryError) -> Error {
    match error {
        TodoRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("todo repository unavailable: {message}"))
        }
        TodoRepositoryError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
    }
}

fn map_validation_error(error: crate::domain::TodoValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

/// Todo service implementing the command driving port.
#[derive(Clone)]
pub struct TodoCommandService<R> {
    todo_repo: Arc<R>,
}

impl<R> TodoCommandService<R> {
    /// Create a new command service over the todo repository.
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }
}

#[async_trait]
impl<R> TodoCommand for TodoCommandService<R>
where
    R: TodoRepository,
{
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse, Error> {
        let todo = Todo::create(request.title, request.user_id).map_err(map_validation_error)?;

        let todo_id = self
            .todo_repo
            .insert(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(CreateTodoResponse { todo_id })
    }

    async fn update_todo(&self, request: UpdateTodoRequest) -> Result<UpdateTodoResponse, Error> {
        let UpdateTodoRequest {
            todo_id,
            title,
            is_completed,
        } = request;

        // Validate before touching the repository.
        let new_title = title
            .map(|raw| TodoTitle::new(raw).map_err(map_validation_error))
            .transpose()?;

        let Some(mut todo) = self
            .todo_repo
            .find_by_id(&todo_id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(UpdateTodoResponse {
                outcome: WriteOutcome::NotFound,
            });
        };

        if let Some(new_title) = new_title {
            todo.change_title(new_title);
        }
        match is_completed {
            Some(true) => todo.mark_completed(),
            Some(false) => todo.mark_incomplete(),
            None => {}
        }

        let outcome = self
            .todo_repo
            .update(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(UpdateTodoResponse { outcome })
    }

    async fn delete_todo(&self, request: DeleteTodoRequest) -> Result<DeleteTodoResponse, Error> {
        let outcome = self
            .todo_repo
            .delete(&request.todo_id)
            .await
            .map_err(map_repository_error)?;

        Ok(DeleteTodoResponse { outcome })
    }

    async fn toggle_todo_completion(
        &self,
        request: ToggleTodoCompletionRequest,
    ) -> Result<ToggleTodoCompletionResponse, Error> {
        let Some(mut todo) = self
            .todo_repo
            .find_by_id(&request.todo_id)
            .await
            .map_err(map_repository_error)?
        else {
            return Ok(ToggleTodoCompletionResponse {
                outcome: WriteOutcome::NotFound,
            });
        };

        todo.toggle_completion();

        let outcome = self
            .todo_repo
            .update(&todo)
            .await
            .map_err(map_repository_error)?;

        Ok(ToggleTodoCompletionResponse { outcome })
    }
}

/// Todo service implementing the query driving port.
#[derive(Clone)]
pub struct TodoQueryService<R> {
    todo_repo: Arc<R>,
}

impl<R> TodoQueryService<R> {
    /// Create a new query service over the todo repository.
    pub fn new(todo_repo: Arc<R>) -> Self {
        Self { todo_repo }
    }
}

#[async_trait]
impl<R> TodoQuery for TodoQueryService<R>
where
    R: TodoRepository,
{
    async fn list_todos(&self) -> Result<ListTodosResponse, Error> {
        let todos = self
            .todo_repo
            .find_all()
            .await
            .map_err(map_repository_error)?;

        Ok(ListTodosResponse {
            todos: todos.into_iter().map(TodoPayload::from).collect(),
        })
    }

    async fn get_todo(&self, request: GetTodoRequest) -> Result<GetTodoResponse, Error> {
        let todo = self
            .todo_repo
            .find_by_id(&request.todo_id)
            .await
            .map_err(map_repository_error)?;

        Ok(GetTodoResponse {
            todo: todo.map(TodoPayload::from),
        })
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
