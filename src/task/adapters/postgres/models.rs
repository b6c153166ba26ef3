//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Task status in canonical storage form.
    pub status: String,
    /// Owning project's identifier.
    pub project_id: i64,
}

/// Insert model for task records; identity is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Task status in canonical storage form.
    pub status: String,
    /// Owning project's identifier.
    pub project_id: i64,
}

/// Changeset for full-row task replacement.
///
/// `treat_none_as_null` keeps full-replace semantics: an absent due date
/// clears the stored column instead of leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement due date.
    pub due_date: Option<NaiveDate>,
    /// Replacement status.
    pub status: String,
    /// Replacement owning project identifier.
    pub project_id: i64,
}
