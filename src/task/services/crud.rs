//! Task CRUD service: guard-clause validation, cross-entity existence
//! checks, and entity-to-DTO mapping.
//!
//! Guards run in a fixed order: field-level checks first, then the
//! clock-based due-date rule, then the project existence lookup. Storage is
//! never touched before every field-level guard has passed.
//!
//! The due-date rule is create-only: an update may carry a past due date,
//! so overdue tasks can still be edited. Both directions are pinned down
//! in tests.

use crate::error::ErrorKind;
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Wire-level payload for creating or replacing a task.
///
/// Fields are optional so that absence surfaces as a service-level
/// validation failure; an unrecognized `status` value, by contrast, is
/// rejected by serde at the parsing boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// Task title; required.
    pub title: Option<String>,
    /// Task description; required.
    pub description: Option<String>,
    /// Due date; on create it must not lie strictly before today.
    pub due_date: Option<NaiveDate>,
    /// Task status; required.
    pub status: Option<TaskStatus>,
    /// Owning project's identifier; required and must reference an
    /// existing project.
    pub project_id: Option<i64>,
}

/// Wire-level representation of a stored task.
///
/// Carries the owning project's identifier, never the embedded project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Task status.
    pub status: TaskStatus,
    /// Owning project's identifier.
    pub project_id: i64,
}

impl TaskResponse {
    fn from_entity(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            status: task.status(),
            project_id: task.project_id().value(),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The title field is absent or blank after trimming.
    #[error("Title cannot be blank")]
    BlankTitle,

    /// The title exceeds [`Task::MAX_TITLE_LEN`].
    #[error("title must be at most 100 characters")]
    TitleTooLong,

    /// The description field is absent or blank after trimming.
    #[error("Description cannot be blank")]
    BlankDescription,

    /// The description exceeds [`Task::MAX_DESCRIPTION_LEN`].
    #[error("description must be at most 1000 characters")]
    DescriptionTooLong,

    /// The status field is absent.
    #[error("status is required")]
    MissingStatus,

    /// The projectId field is absent.
    #[error("projectId is required")]
    MissingProjectId,

    /// The due date lies strictly before today (create only).
    #[error("dueDate cannot be in the past")]
    DueDateInPast,

    /// The referenced project does not exist.
    #[error("Project not found")]
    ProjectNotFound(ProjectId),

    /// No task exists for the identifier given to a fetch or update.
    #[error("Task not found")]
    NotFound(TaskId),

    /// No task exists for the identifier given to a delete.
    #[error("Task not found for delete")]
    NotFoundForDelete(TaskId),

    /// Task storage failure, propagated unclassified.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Project storage failure during the existence check, propagated
    /// unclassified.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
}

impl TaskServiceError {
    /// Classifies the error for transport-layer status mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankTitle
            | Self::TitleTooLong
            | Self::BlankDescription
            | Self::DescriptionTooLong
            | Self::MissingStatus
            | Self::MissingProjectId
            | Self::DueDateInPast => ErrorKind::Validation,
            Self::ProjectNotFound(_) | Self::NotFound(_) | Self::NotFoundForDelete(_) => {
                ErrorKind::NotFound
            }
            Self::Repository(_) | Self::ProjectRepository(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Fields extracted from a request once every field-level guard has passed.
struct ValidTaskFields {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    project_id: ProjectId,
}

/// Task validation and mapping service.
///
/// Depends on the project repository as well as its own: the foreign-key
/// existence check runs before any task mutation.
#[derive(Clone)]
pub struct TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<T>,
    project_repository: Arc<P>,
    clock: Arc<C>,
}

impl<T, P, C> TaskService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<T>, project_repository: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            repository,
            project_repository,
            clock,
        }
    }

    /// Validates and persists a new task under an existing project.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a field guard fails (including a
    /// due date strictly before today),
    /// [`TaskServiceError::ProjectNotFound`] when the referenced project
    /// does not exist, or a repository error when persistence fails.
    pub async fn create(&self, request: TaskRequest) -> TaskServiceResult<TaskResponse> {
        let fields = validate(&request)?;

        if let Some(due) = fields.due_date
            && due < self.today()
        {
            return Err(TaskServiceError::DueDateInPast);
        }

        let project = self
            .project_repository
            .find_by_id(fields.project_id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(fields.project_id))?;

        let entity = NewTask::new(
            fields.title,
            fields.description,
            fields.due_date,
            fields.status,
            project.id(),
        );
        let saved = self.repository.insert(&entity).await?;
        tracing::debug!(
            task_id = saved.id().value(),
            project_id = saved.project_id().value(),
            "task created"
        );
        Ok(TaskResponse::from_entity(&saved))
    }

    /// Returns every stored task in storage-defined order.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the listing fails.
    pub async fn find_all(&self) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.find_all().await?;
        Ok(tasks.iter().map(TaskResponse::from_entity).collect())
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or a repository error when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<TaskResponse> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        Ok(TaskResponse::from_entity(&task))
    }

    /// Lists the tasks owned by an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project does
    /// not exist, or a repository error when the lookup fails.
    pub async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> TaskServiceResult<Vec<TaskResponse>> {
        let project = self
            .project_repository
            .find_by_id(project_id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(project_id))?;

        let tasks = self.repository.find_by_project(project.id()).await?;
        Ok(tasks.iter().map(TaskResponse::from_entity).collect())
    }

    /// Validates and applies a full-replace update, including the project
    /// reference.
    ///
    /// Re-runs the create-time field guards; the due-date-in-past rule is
    /// deliberately not re-applied here (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns a validation error when a field guard fails,
    /// [`TaskServiceError::NotFound`] when the task identifier is absent,
    /// [`TaskServiceError::ProjectNotFound`] when the referenced project
    /// does not exist, or a repository error when persistence fails.
    pub async fn update(&self, id: TaskId, request: TaskRequest) -> TaskServiceResult<TaskResponse> {
        let fields = validate(&request)?;

        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        let project = self
            .project_repository
            .find_by_id(fields.project_id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(fields.project_id))?;

        task.replace(
            fields.title,
            fields.description,
            fields.due_date,
            fields.status,
            project.id(),
        );
        let saved = self.repository.update(&task).await?;
        tracing::debug!(task_id = saved.id().value(), "task replaced");
        Ok(TaskResponse::from_entity(&saved))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFoundForDelete`] when the identifier
    /// is absent, or a repository error when the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(TaskServiceError::NotFoundForDelete(id));
        }
        self.repository.delete_by_id(id).await?;
        tracing::debug!(task_id = id.value(), "task deleted");
        Ok(())
    }

    /// The current calendar date per the injected clock.
    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

/// Runs the field-level guards in their fixed order and extracts trimmed
/// fields.
///
/// The due-date rule is not part of this function: it applies to create
/// only, and the caller decides whether to enforce it.
fn validate(request: &TaskRequest) -> TaskServiceResult<ValidTaskFields> {
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or(TaskServiceError::BlankTitle)?;
    if title.chars().count() > Task::MAX_TITLE_LEN {
        return Err(TaskServiceError::TitleTooLong);
    }

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .ok_or(TaskServiceError::BlankDescription)?;
    if description.chars().count() > Task::MAX_DESCRIPTION_LEN {
        return Err(TaskServiceError::DescriptionTooLong);
    }

    let status = request.status.ok_or(TaskServiceError::MissingStatus)?;
    let project_id = request
        .project_id
        .map(ProjectId::new)
        .ok_or(TaskServiceError::MissingProjectId)?;

    Ok(ValidTaskFields {
        title: title.to_owned(),
        description: description.to_owned(),
        due_date: request.due_date,
        status,
        project_id,
    })
}
