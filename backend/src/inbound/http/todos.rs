//! Todo HTTP handlers.
//!
//! ```text
//! GET    /todos
//! GET    /todos/{id}
//! POST   /todos
//! PUT    /todos/{id}
//! DELETE /todos/{id}
//! PATCH  /todos/{id}/toggle
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::ports::{
    CreateTodoRequest, DeleteTodoRequest, GetTodoRequest, TodoPayload,
    ToggleTodoCompletionRequest, UpdateTodoRequest, WriteOutcome,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Read snapshot of a todo returned by every successful read.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponseBody {
    /// Durable identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Current title.
    pub title: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<TodoPayload> for TodoResponseBody {
    fn from(value: TodoPayload) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            is_completed: value.is_completed,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequestBody {
    /// Title of the new todo.
    pub title: String,
}

/// Request payload for updating a todo.
///
/// Absent fields leave the stored value unchanged; an explicit
/// `isCompleted: false` is distinct from omitting the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequestBody {
    /// Replacement title, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement completion flag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

fn parse_todo_id(raw: String) -> Result<Uuid, Error> {
    parse_uuid(raw, FieldName::new("id"))
}

fn todo_not_found(todo_id: Uuid) -> Error {
    Error::not_found(format!("todo {todo_id} not found"))
}

/// List every todo, most recently created first.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos, newest first", body = [TodoResponseBody]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponseBody>>> {
    let response = state.todos_query.list_todos().await?;

    Ok(web::Json(
        response
            .todos
            .into_iter()
            .map(TodoResponseBody::from)
            .collect(),
    ))
}

/// Read a single todo by id.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Matching todo", body = TodoResponseBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such todo", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoResponseBody>> {
    let todo_id = parse_todo_id(path.into_inner())?;

    let response = state
        .todos_query
        .get_todo(GetTodoRequest { todo_id })
        .await?;

    response
        .todo
        .map(|todo| web::Json(TodoResponseBody::from(todo)))
        .ok_or_else(|| todo_not_found(todo_id))
}

/// Create a todo and return its stored snapshot.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequestBody,
    responses(
        (status = 201, description = "Todo created", body = TodoResponseBody,
            headers(("Location" = String, description = "URL of the created todo"))),
        (status = 400, description = "Blank title", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequestBody>,
) -> ApiResult<HttpResponse> {
    let created = state
        .todos
        .create_todo(CreateTodoRequest {
            title: payload.into_inner().title,
            user_id: None,
        })
        .await?;

    // Re-read through the query port so the response reflects the durable
    // record, including a backend-assigned identifier.
    let fetched = state
        .todos_query
        .get_todo(GetTodoRequest {
            todo_id: created.todo_id,
        })
        .await?;
    let body = fetched
        .todo
        .map(TodoResponseBody::from)
        .ok_or_else(|| Error::internal("created todo could not be reloaded"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/todos/{}", created.todo_id)))
        .json(body))
}

/// Apply the present fields of the request to an existing todo.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo identifier")),
    request_body = UpdateTodoRequestBody,
    responses(
        (status = 204, description = "Todo updated"),
        (status = 400, description = "Malformed identifier or blank title", body = ErrorSchema),
        (status = 404, description = "No such todo", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequestBody>,
) -> ApiResult<HttpResponse> {
    let todo_id = parse_todo_id(path.into_inner())?;
    let body = payload.into_inner();

    let response = state
        .todos
        .update_todo(UpdateTodoRequest {
            todo_id,
            title: body.title,
            is_completed: body.is_completed,
        })
        .await?;

    match response.outcome {
        WriteOutcome::Applied => Ok(HttpResponse::NoContent().finish()),
        WriteOutcome::NotFound => Err(todo_not_found(todo_id)),
    }
}

/// Delete a todo by id.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such todo", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let todo_id = parse_todo_id(path.into_inner())?;

    let response = state.todos.delete_todo(DeleteTodoRequest { todo_id }).await?;

    match response.outcome {
        WriteOutcome::Applied => Ok(HttpResponse::NoContent().finish()),
        WriteOutcome::NotFound => Err(todo_not_found(todo_id)),
    }
}

/// Flip the completion flag of an existing todo.
#[utoipa::path(
    patch,
    path = "/todos/{id}/toggle",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Completion flag flipped"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such todo", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "toggleTodoCompletion"
)]
#[patch("/todos/{id}/toggle")]
pub async fn toggle_todo_completion(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let todo_id = parse_todo_id(path.into_inner())?;

    let response = state
        .todos
        .toggle_todo_completion(ToggleTodoCompletionRequest { todo_id })
        .await?;

    match response.outcome {
        WriteOutcome::Applied => Ok(HttpResponse::NoContent().finish()),
        WriteOutcome::NotFound => Err(todo_not_found(todo_id)),
    }
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
