//! Diesel row models for project persistence.

use super::schema::projects;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
}

/// Insert model for project records; identity is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
}

/// Changeset for full-row project replacement.
///
/// `treat_none_as_null` keeps full-replace semantics: an absent date clears
/// the stored column instead of leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset {
    /// Replacement name.
    pub name: String,
    /// Replacement description.
    pub description: String,
    /// Replacement start date.
    pub start_date: Option<NaiveDate>,
    /// Replacement end date.
    pub end_date: Option<NaiveDate>,
}
