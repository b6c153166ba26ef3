//! Task entity and identifier types.

use super::TaskStatus;
use crate::project::domain::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
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

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unsaved task, validated by the service but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    project_id: ProjectId,
}

impl NewTask {
    /// Creates an unsaved task from already-validated fields.
    #[must_use]
    pub const fn new(
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
        status: TaskStatus,
        project_id: ProjectId,
    ) -> Self {
        Self {
            title,
            description,
            due_date,
            status,
            project_id,
        }
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project's identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Owning project's identifier.
    pub project_id: ProjectId,
}

/// A persisted task record, owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    project_id: ProjectId,
}

impl Task {
    /// Maximum length of a task title, matching the schema column.
    pub const MAX_TITLE_LEN: usize = 100;

    /// Maximum length of a task description, matching the schema column.
    pub const MAX_DESCRIPTION_LEN: usize = 1000;

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            title,
            description,
            due_date,
            status,
            project_id,
        } = data;
        Self {
            id,
            title,
            description,
            due_date,
            status,
            project_id,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project's identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Overwrites every mutable field with replacement values.
    ///
    /// Updates are full-replace, including the project reference; identity
    /// never changes.
    pub fn replace(
        &mut self,
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
        status: TaskStatus,
        project_id: ProjectId,
    ) {
        self.title = title;
        self.description = description;
        self.due_date = due_date;
        self.status = status;
        self.project_id = project_id;
    }
}
