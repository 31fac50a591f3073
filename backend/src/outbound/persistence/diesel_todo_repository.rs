//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! This adapter translates between rows and validated domain entities and
//! maps every backend failure into the repository port's error type. The
//! write methods report a missing target as [`WriteOutcome::NotFound`]
//! instead of an error, per the port contract.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{IdAssignment, TodoRepository, TodoRepositoryError, WriteOutcome};
use crate::domain::{Todo, TodoDraft};

use super::models::{NewBackendIdTodoRow, NewTodoRow, TodoRow, TodoUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the todo repository port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
    id_assignment: IdAssignment,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool and id policy.
    pub fn new(pool: DbPool, id_assignment: IdAssignment) -> Self {
        Self {
            pool,
            id_assignment,
        }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    TodoRepositoryError::connection(message)
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => TodoRepositoryError::query("record not found"),
        _ => TodoRepositoryError::query("database error"),
    }
}

/// Convert a database row into a validated domain todo.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let TodoRow {
        id,
        title,
        is_completed,
        created_at,
        user_id,
    } = row;

    Todo::restore(TodoDraft {
        id,
        title,
        is_completed,
        created_at,
        user_id,
    })
    .map_err(|err| TodoRepositoryError::query(err.to_string()))
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .order((todos::created_at.desc(), todos::id.desc()))
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = todos::table
            .filter(todos::id.eq(todo_id))
            .select(TodoRow::as_select())
            .first::<TodoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn insert(&self, todo: &Todo) -> Result<Uuid, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        match self.id_assignment {
            IdAssignment::CoreGenerated => {
                let new_row = NewTodoRow {
                    id: todo.id(),
                    title: todo.title().as_ref(),
                    is_completed: todo.is_completed(),
                    created_at: todo.created_at(),
                    user_id: todo.user_id(),
                };

                diesel::insert_into(todos::table)
                    .values(&new_row)
                    .returning(todos::id)
                    .get_result::<Uuid>(&mut conn)
                    .await
                    .map_err(map_diesel_error)
            }
            IdAssignment::BackendAssigned => {
                let new_row = NewBackendIdTodoRow {
                    title: todo.title().as_ref(),
                    is_completed: todo.is_completed(),
                    created_at: todo.created_at(),
                    user_id: todo.user_id(),
                };

                diesel::insert_into(todos::table)
                    .values(&new_row)
                    .returning(todos::id)
                    .get_result::<Uuid>(&mut conn)
                    .await
                    .map_err(map_diesel_error)
            }
        }
    }

    async fn update(&self, todo: &Todo) -> Result<WriteOutcome, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = TodoUpdate {
            title: todo.title().as_ref(),
            is_completed: todo.is_completed(),
        };

        let affected = diesel::update(todos::table.filter(todos::id.eq(todo.id())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(if affected == 0 {
            WriteOutcome::NotFound
        } else {
            WriteOutcome::Applied
        })
    }

    async fn delete(&self, todo_id: &Uuid) -> Result<WriteOutcome, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(todos::table.filter(todos::id.eq(todo_id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(if affected == 0 {
            WriteOutcome::NotFound
        } else {
            WriteOutcome::Applied
        })
    }
}
