//! In-memory implementation of the `ProjectRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing without
//! database dependencies. Not suitable for production use.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::project::{
    domain::{NewProject, PersistedProjectData, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Hook invoked after a project row is removed.
///
/// The SQL schema declares `ON DELETE CASCADE` on the task foreign key;
/// in-memory stores mirror that contract by registering a hook that removes
/// dependent rows. See `InMemoryTaskRepository::attach_cascade`.
pub type CascadeHook = Box<dyn Fn(ProjectId) + Send + Sync>;

/// In-memory implementation of [`ProjectRepository`].
///
/// Thread-safe via internal [`RwLock`]. Rows are kept in a [`BTreeMap`] so
/// listing order matches a serial primary key, like the backing database.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<BTreeMap<ProjectId, Project>>>,
    next_id: Arc<AtomicI64>,
    cascades: Arc<RwLock<Vec<CascadeHook>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook that runs after a project row is deleted.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the hook registry lock is poisoned.
    pub fn on_delete(
        &self,
        hook: impl Fn(ProjectId) + Send + Sync + 'static,
    ) -> ProjectRepositoryResult<()> {
        let mut cascades = self
            .cascades
            .write()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        cascades.push(Box::new(hook));
        Ok(())
    }

    /// Returns the number of stored projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no projects are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error<E: std::fmt::Display>(err: &E) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self
            .state
            .read()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self
            .state
            .read()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.get(&id).cloned())
    }

    async fn insert(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        let id = ProjectId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let saved = Project::from_persisted(PersistedProjectData {
            id,
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
        });
        state.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        if !state.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::NotFound(project.id()));
        }
        state.insert(project.id(), project.clone());
        Ok(project.clone())
    }

    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.contains_key(&id))
    }

    async fn exists_by_name_ignore_case(&self, name: &str) -> ProjectRepositoryResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
        let needle = name.to_lowercase();
        Ok(state
            .values()
            .any(|project| project.name().to_lowercase() == needle))
    }

    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let removed = {
            let mut state = self
                .state
                .write()
                .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
            state.remove(&id)
        };

        // Cascade hooks run outside the row lock to keep lock ordering flat.
        if removed.is_some() {
            let cascades = self
                .cascades
                .read()
                .map_err(|err| ProjectRepositoryError::persistence(lock_error(&err)))?;
            for hook in cascades.iter() {
                hook(id);
            }
        }
        Ok(())
    }
}
