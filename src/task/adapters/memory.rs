//! In-memory implementation of the `TaskRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing without
//! database dependencies. Not suitable for production use.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::project::adapters::memory::InMemoryProjectRepository;
use crate::project::domain::ProjectId;
use crate::project::ports::ProjectRepositoryResult;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory implementation of [`TaskRepository`].
///
/// Thread-safe via internal [`RwLock`]. Rows are kept in a [`BTreeMap`] so
/// listing order matches a serial primary key, like the backing database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BTreeMap<TaskId, Task>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the SQL schema's `ON DELETE CASCADE`: registers a hook on
    /// the project repository that removes this store's dependent tasks
    /// whenever a project row is deleted.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when hook registration fails.
    pub fn attach_cascade(
        &self,
        projects: &InMemoryProjectRepository,
    ) -> ProjectRepositoryResult<()> {
        let state = Arc::clone(&self.state);
        projects.on_delete(move |project_id| {
            if let Ok(mut tasks) = state.write() {
                tasks.retain(|_, task| task.project_id() != project_id);
            }
        })
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error<E: std::fmt::Display>(err: &E) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        Ok(state
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        let id = TaskId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let saved = Task::from_persisted(PersistedTaskData {
            id,
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            status: task.status(),
            project_id: task.project_id(),
        });
        state.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        Ok(state.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::persistence(lock_error(&err)))?;
        state.remove(&id);
        Ok(())
    }
}
