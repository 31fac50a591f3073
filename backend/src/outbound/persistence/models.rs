//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::todos;

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
}

/// Insertable struct persisting the entity-generated identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
}

/// Insertable struct omitting `id` so the database default assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewBackendIdTodoRow<'a> {
    pub title: &'a str,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
}

/// Changeset struct for updating the mutable todo fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub(crate) struct TodoUpdate<'a> {
    pub title: &'a str,
    pub is_completed: bool,
}
