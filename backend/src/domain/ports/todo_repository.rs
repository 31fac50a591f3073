//! Port for todo persistence.
//!
//! Not-found is signalled in-band (`Option` for reads, [`WriteOutcome`] for
//! writes); the error type is reserved for genuine backend failures so the
//! two are never conflated by callers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Todo;

/// Errors raised by todo repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoRepositoryError {
    /// Repository connection could not be established.
    #[error("todo repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("todo repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl TodoRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Result of a repository write targeting an existing record.
///
/// Distinguishes "the target record does not exist" from backend failures,
/// which travel through the repository error type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write reached an existing record.
    Applied,
    /// No record matched the target identifier; nothing was written.
    NotFound,
}

impl WriteOutcome {
    /// True when the write reached an existing record.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Which side mints the durable identifier when inserting a record.
///
/// Either way [`TodoRepository::insert`] returns the identifier that was
/// actually persisted; callers must use the returned value rather than the
/// entity's provisional one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdAssignment {
    /// Persist the identifier generated by the entity factory.
    CoreGenerated,
    /// Let the storage backend assign the identifier on insert.
    #[default]
    BackendAssigned,
}

impl std::str::FromStr for IdAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::CoreGenerated),
            "backend" => Ok(Self::BackendAssigned),
            other => Err(format!(
                "unknown id assignment policy `{other}`; expected `core` or `backend`"
            )),
        }
    }
}

/// Port for reading and writing todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Read every todo, ordered by creation time descending.
    ///
    /// An empty store yields an empty vec, never an error.
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Find a todo by id. `None` means no such record.
    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Persist a new todo and return its durable identifier.
    async fn insert(&self, todo: &Todo) -> Result<Uuid, TodoRepositoryError>;

    /// Persist mutated fields of an existing todo.
    async fn update(&self, todo: &Todo) -> Result<WriteOutcome, TodoRepositoryError>;

    /// Remove a todo by id.
    async fn delete(&self, todo_id: &Uuid) -> Result<WriteOutcome, TodoRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTodoRepository;

#[async_trait]
impl TodoRepository for FixtureTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(None)
    }

    async fn insert(&self, todo: &Todo) -> Result<Uuid, TodoRepositoryError> {
        Ok(todo.id())
    }

    async fn update(&self, _todo: &Todo) -> Result<WriteOutcome, TodoRepositoryError> {
        Ok(WriteOutcome::NotFound)
    }

    async fn delete(&self, _todo_id: &Uuid) -> Result<WriteOutcome, TodoRepositoryError> {
        Ok(WriteOutcome::NotFound)
    }
}
