//! Domain ports and supporting types for the hexagonal boundary.

mod todo_command;
mod todo_query;
mod todo_repository;

#[cfg(test)]
pub use todo_command::MockTodoCommand;
pub use todo_command::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    FixtureTodoCommand, TodoCommand, ToggleTodoCompletionRequest, ToggleTodoCompletionResponse,
    UpdateTodoRequest, UpdateTodoResponse,
};
#[cfg(test)]
pub use todo_query::MockTodoQuery;
pub use todo_query::{
    FixtureTodoQuery, GetTodoRequest, GetTodoResponse, ListTodosResponse, TodoPayload, TodoQuery,
};
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{
    FixtureTodoRepository, IdAssignment, TodoRepository, TodoRepositoryError, WriteOutcome,
};
