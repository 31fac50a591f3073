//! In-memory `TodoRepository` implementation.
//!
//! Serves two roles: the default store when no database is configured, and
//! the backing store for handler-level tests. It honours the exact port
//! contract of the database adapter: creation-time descending order,
//! in-band not-found signalling, and both id assignment policies.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{IdAssignment, TodoRepository, TodoRepositoryError, WriteOutcome};
use crate::domain::{Todo, TodoDraft};

/// Mutex-guarded in-memory todo store.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    items: Mutex<Vec<Todo>>,
    id_assignment: IdAssignment,
}

impl InMemoryTodoRepository {
    /// Create an empty store with the given id assignment policy.
    #[must_use]
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            id_assignment,
        }
    }

    fn with_items<T>(
        &self,
        f: impl FnOnce(&mut Vec<Todo>) -> T,
    ) -> Result<T, TodoRepositoryError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| TodoRepositoryError::query("todo store mutex poisoned"))?;
        Ok(f(&mut items))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        self.with_items(|items| {
            // Reverse insertion order first so equal timestamps still come
            // out newest-inserted first after the stable sort.
            let mut todos: Vec<Todo> = items.iter().rev().cloned().collect();
            todos.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
            todos
        })
    }

    async fn find_by_id(&self, todo_id: &Uuid) -> Result<Option<Todo>, TodoRepositoryError> {
        self.with_items(|items| items.iter().find(|todo| todo.id() == *todo_id).cloned())
    }

    async fn insert(&self, todo: &Todo) -> Result<Uuid, TodoRepositoryError> {
        let stored = match self.id_assignment {
            IdAssignment::CoreGenerated => todo.clone(),
            IdAssignment::BackendAssigned => Todo::restore(TodoDraft {
                id: Uuid::new_v4(),
                title: todo.title().as_ref().to_owned(),
                is_completed: todo.is_completed(),
                created_at: todo.created_at(),
                user_id: todo.user_id(),
            })
            .map_err(|err| TodoRepositoryError::query(err.to_string()))?,
        };

        let id = stored.id();
        self.with_items(|items| items.push(stored))?;
        Ok(id)
    }

    async fn update(&self, todo: &Todo) -> Result<WriteOutcome, TodoRepositoryError> {
        self.with_items(|items| {
            items
                .iter_mut()
                .find(|stored| stored.id() == todo.id())
                .map_or(WriteOutcome::NotFound, |stored| {
                    *stored = todo.clone();
                    WriteOutcome::Applied
                })
        })
    }

    async fn delete(&self, todo_id: &Uuid) -> Result<WriteOutcome, TodoRepositoryError> {
        self.with_items(|items| {
            let before = items.len();
            items.retain(|todo| todo.id() != *todo_id);
            if items.len() == before {
                WriteOutcome::NotFound
            } else {
                WriteOutcome::Applied
            }
        })
    }
}
