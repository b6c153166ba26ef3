//! Repository port for project persistence and lookup.

use crate::project::domain::{NewProject, Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Uniqueness and foreign-key existence are checked by the service layer
/// before mutation; the repository only stores, loads, and probes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every stored project in storage-defined order.
    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Inserts a new project and returns it with its store-assigned identity.
    async fn insert(&self, project: &NewProject) -> ProjectRepositoryResult<Project>;

    /// Persists a full-row replacement of an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when no row matches the
    /// project's identity.
    async fn update(&self, project: &Project) -> ProjectRepositoryResult<Project>;

    /// Reports whether a project with the given identifier exists.
    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool>;

    /// Reports whether a project with the given name exists, compared
    /// case-insensitively.
    async fn exists_by_name_ignore_case(&self, name: &str) -> ProjectRepositoryResult<bool>;

    /// Deletes the project with the given identifier.
    ///
    /// Dependent tasks are removed by the storage layer's cascade contract.
    /// Deleting an absent identifier is a no-op; the service checks
    /// existence first.
    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A full-row update matched no stored project.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
