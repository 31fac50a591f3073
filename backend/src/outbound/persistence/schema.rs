//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database schema exactly; Diesel uses them
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Todo items table.
    ///
    /// The `id` column is the primary key; when the backend assigns
    /// identifiers it carries a `gen_random_uuid()` default.
    todos (id) {
        /// Primary key: UUID identifier.
        id -> Uuid,
        /// Todo title; application-enforced as non-blank.
        title -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Optional owner identifier reserved for ownership scoping.
        user_id -> Nullable<Uuid>,
    }
}
