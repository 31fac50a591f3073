//! Todo data model.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Validation errors returned by the todo constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// The title was empty or contained only whitespace.
    EmptyTitle,
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
        }
    }
}

impl std::error::Error for TodoValidationError {}

/// Title of a todo item.
///
/// ## Invariants
/// - never empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a [`TodoTitle`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, TodoValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted field set used to rebuild a [`Todo`] from storage.
///
/// Storage adapters pass every persisted column through this draft so the
/// entity is reconstructed via [`Todo::restore`] instead of any field-level
/// assignment path that could skip validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    /// Durable identifier of the record.
    pub id: Uuid,
    /// Raw stored title; validated during restoration.
    pub title: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional owner identifier.
    pub user_id: Option<Uuid>,
}

/// Todo item.
///
/// ## Invariants
/// - `title` is never empty once trimmed of whitespace.
/// - `id` and `created_at` are fixed at construction and never reassigned.
///
/// Both constructors validate; there is no way to build or mutate a `Todo`
/// that violates the title invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    id: Uuid,
    title: TodoTitle,
    is_completed: bool,
    created_at: DateTime<Utc>,
    user_id: Option<Uuid>,
}

impl Todo {
    /// Create a fresh todo with a generated identifier and the current time.
    ///
    /// New items always start incomplete.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Todo;
    ///
    /// let todo = Todo::create("Buy milk", None).expect("non-empty title");
    /// assert!(!todo.is_completed());
    /// ```
    pub fn create(
        title: impl Into<String>,
        user_id: Option<Uuid>,
    ) -> Result<Self, TodoValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: TodoTitle::new(title)?,
            is_completed: false,
            created_at: Utc::now(),
            user_id,
        })
    }

    /// Rebuild a todo from persisted fields.
    pub fn restore(draft: TodoDraft) -> Result<Self, TodoValidationError> {
        let TodoDraft {
            id,
            title,
            is_completed,
            created_at,
            user_id,
        } = draft;

        Ok(Self {
            id,
            title: TodoTitle::new(title)?,
            is_completed,
            created_at,
            user_id,
        })
    }

    /// Replace the title with an already validated one.
    pub fn change_title(&mut self, new_title: TodoTitle) {
        self.title = new_title;
    }

    /// Mark the todo complete. Idempotent.
    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    /// Mark the todo incomplete. Idempotent.
    pub fn mark_incomplete(&mut self) {
        self.is_completed = false;
    }

    /// Flip the completion flag.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Durable identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current title.
    #[must_use]
    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Completion flag.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Optional owner identifier reserved for future ownership scoping.
    #[must_use]
    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }
}

#[cfg(test)]
mod tests;
