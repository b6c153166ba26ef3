//! Project CRUD service: guard-clause validation, uniqueness checks, and
//! entity-to-DTO mapping.
//!
//! Guards run in a fixed order and always before any storage access, so
//! malformed input never triggers a store query. The uniqueness probe is a
//! create-only rule: update re-runs the field guards but deliberately skips
//! it, allowing a project to be renamed into a previously vacated name.

use crate::error::ErrorKind;
use crate::project::{
    domain::{NewProject, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Wire-level payload for creating or replacing a project.
///
/// String fields are optional so that an absent field surfaces as a
/// service-level validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    /// Project name; required, unique case-insensitively after trimming.
    pub name: Option<String>,
    /// Project description; required.
    pub description: Option<String>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date; must be strictly after the start date when both
    /// are present.
    pub end_date: Option<NaiveDate>,
}

/// Wire-level representation of a stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
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

impl ProjectResponse {
    fn from_entity(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
        }
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// The name field is absent or blank after trimming.
    #[error("Name must be filled in")]
    BlankName,

    /// The name exceeds [`Project::MAX_NAME_LEN`].
    #[error("name must be at most 30 characters")]
    NameTooLong,

    /// The description field is absent or blank after trimming.
    #[error("Description must be filled in")]
    BlankDescription,

    /// The description exceeds [`Project::MAX_DESCRIPTION_LEN`].
    #[error("description must be at most 100 characters")]
    DescriptionTooLong,

    /// Both dates are present and the end date is not strictly after the
    /// start date.
    #[error("endDate must be after startDate")]
    EndDateNotAfterStartDate,

    /// Another project already uses the name, compared case-insensitively.
    #[error("Project name already exists")]
    DuplicateName,

    /// No project exists for the identifier given to a fetch.
    #[error("Id not found")]
    IdNotFound(ProjectId),

    /// No project exists for the identifier given to an update.
    #[error("Project not found")]
    NotFound(ProjectId),

    /// No project exists for the identifier given to a delete.
    #[error("Not found for delete")]
    NotFoundForDelete(ProjectId),

    /// Storage-layer failure, propagated unclassified.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

impl ProjectServiceError {
    /// Classifies the error for transport-layer status mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankName
            | Self::NameTooLong
            | Self::BlankDescription
            | Self::DescriptionTooLong
            | Self::EndDateNotAfterStartDate => ErrorKind::Validation,
            Self::DuplicateName => ErrorKind::Conflict,
            Self::IdNotFound(_) | Self::NotFound(_) | Self::NotFoundForDelete(_) => {
                ErrorKind::NotFound
            }
            Self::Repository(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Fields extracted from a request once every guard has passed.
struct ValidProjectFields {
    name: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

/// Project validation and mapping service.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and persists a new project.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a field guard fails,
    /// [`ProjectServiceError::DuplicateName`] when the trimmed name is
    /// already taken (case-insensitively), or a repository error when
    /// persistence fails.
    pub async fn create(&self, request: ProjectRequest) -> ProjectServiceResult<ProjectResponse> {
        let fields = validate(&request)?;

        if self
            .repository
            .exists_by_name_ignore_case(&fields.name)
            .await?
        {
            return Err(ProjectServiceError::DuplicateName);
        }

        let entity = NewProject::new(
            fields.name,
            fields.description,
            fields.start_date,
            fields.end_date,
        );
        let saved = self.repository.insert(&entity).await?;
        tracing::debug!(project_id = saved.id().value(), "project created");
        Ok(ProjectResponse::from_entity(&saved))
    }

    /// Returns every stored project in storage-defined order.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the listing fails.
    pub async fn find_all(&self) -> ProjectServiceResult<Vec<ProjectResponse>> {
        let projects = self.repository.find_all().await?;
        Ok(projects.iter().map(ProjectResponse::from_entity).collect())
    }

    /// Fetches a single project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::IdNotFound`] when no project has the
    /// identifier, or a repository error when the lookup fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectServiceResult<ProjectResponse> {
        let project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::IdNotFound(id))?;
        Ok(ProjectResponse::from_entity(&project))
    }

    /// Validates and applies a full-replace update.
    ///
    /// Re-runs the create-time field guards but not the uniqueness check;
    /// see the module docs for why.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a field guard fails,
    /// [`ProjectServiceError::NotFound`] when the identifier is absent, or
    /// a repository error when persistence fails.
    pub async fn update(
        &self,
        id: ProjectId,
        request: ProjectRequest,
    ) -> ProjectServiceResult<ProjectResponse> {
        let fields = validate(&request)?;

        let mut project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))?;

        project.replace(
            fields.name,
            fields.description,
            fields.start_date,
            fields.end_date,
        );
        let saved = self.repository.update(&project).await?;
        tracing::debug!(project_id = saved.id().value(), "project replaced");
        Ok(ProjectResponse::from_entity(&saved))
    }

    /// Deletes a project; dependent tasks are removed by the storage
    /// layer's cascade contract.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFoundForDelete`] when the
    /// identifier is absent, or a repository error when the delete fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ProjectServiceError::NotFoundForDelete(id));
        }
        self.repository.delete_by_id(id).await?;
        tracing::debug!(project_id = id.value(), "project deleted");
        Ok(())
    }
}

/// Runs the field guards in their fixed order and extracts trimmed fields.
fn validate(request: &ProjectRequest) -> ProjectServiceResult<ValidProjectFields> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ProjectServiceError::BlankName)?;
    if name.chars().count() > Project::MAX_NAME_LEN {
        return Err(ProjectServiceError::NameTooLong);
    }

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .ok_or(ProjectServiceError::BlankDescription)?;
    if description.chars().count() > Project::MAX_DESCRIPTION_LEN {
        return Err(ProjectServiceError::DescriptionTooLong);
    }

    if let (Some(start), Some(end)) = (request.start_date, request.end_date)
        && end <= start
    {
        return Err(ProjectServiceError::EndDateNotAfterStartDate);
    }

    Ok(ValidProjectFields {
        name: name.to_owned(),
        description: description.to_owned(),
        start_date: request.start_date,
        end_date: request.end_date,
    })
}
