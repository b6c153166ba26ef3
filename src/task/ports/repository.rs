//! Repository port for task persistence and lookup.

use crate::project::domain::ProjectId;
use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The referenced project's existence is verified by the service before
/// insert or update; the repository assumes a valid reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in storage-defined order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task owned by the given project.
    async fn find_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts a new task and returns it with its store-assigned identity.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Persists a full-row replacement of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row matches the
    /// task's identity.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Reports whether a task with the given identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Deletes the task with the given identifier.
    ///
    /// Deleting an absent identifier is a no-op; the service checks
    /// existence first.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A full-row update matched no stored task.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
