//! Project entity and identifier types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a project record.
///
/// Identity is generated by the persistence layer at first insert and is
/// immutable afterwards; callers never choose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unsaved project, validated by the service but not yet persisted.
///
/// Inserting it yields a [`Project`] carrying the store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl NewProject {
    /// Creates an unsaved project from already-validated fields.
    #[must_use]
    pub const fn new(
        name: String,
        description: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name,
            description,
            start_date,
            end_date,
        }
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Store-assigned identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted start date, if any.
    pub start_date: Option<NaiveDate>,
    /// Persisted end date, if any.
    pub end_date: Option<NaiveDate>,
}

/// A persisted project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Project {
    /// Maximum length of a project name, matching the schema column.
    pub const MAX_NAME_LEN: usize = 30;

    /// Maximum length of a project description, matching the schema column.
    pub const MAX_DESCRIPTION_LEN: usize = 100;

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let PersistedProjectData {
            id,
            name,
            description,
            start_date,
            end_date,
        } = data;
        Self {
            id,
            name,
            description,
            start_date,
            end_date,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Overwrites every mutable field with replacement values.
    ///
    /// Updates are full-replace: absent dates clear the stored dates rather
    /// than leaving them untouched. Identity never changes.
    pub fn replace(
        &mut self,
        name: String,
        description: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) {
        self.name = name;
        self.description = description;
        self.start_date = start_date;
        self.end_date = end_date;
    }
}
