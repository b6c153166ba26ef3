//! Shared fixtures for the in-memory integration suite.

use std::sync::Arc;

use chantier::project::adapters::memory::InMemoryProjectRepository;
use chantier::project::services::{ProjectRequest, ProjectService};
use chantier::task::adapters::memory::InMemoryTaskRepository;
use chantier::task::domain::TaskStatus;
use chantier::task::services::{TaskRequest, TaskService};
use chrono::NaiveDate;
use mockable::DefaultClock;

/// Both services wired over a shared pair of in-memory stores, with the
/// cascade hook attached the way a database schema would enforce it.
pub struct Backend {
    /// Project service under test.
    pub projects: ProjectService<InMemoryProjectRepository>,
    /// Task service under test.
    pub tasks: TaskService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>,
    /// Direct handle to the task store for post-condition checks.
    pub task_store: InMemoryTaskRepository,
}

/// Builds a fully wired in-memory backend.
///
/// # Errors
///
/// Returns an error when cascade registration fails.
pub fn backend() -> eyre::Result<Backend> {
    let project_store = InMemoryProjectRepository::new();
    let task_store = InMemoryTaskRepository::new();
    task_store.attach_cascade(&project_store)?;

    let project_repository = Arc::new(project_store);
    Ok(Backend {
        projects: ProjectService::new(Arc::clone(&project_repository)),
        tasks: TaskService::new(
            Arc::new(task_store.clone()),
            project_repository,
            Arc::new(DefaultClock),
        ),
        task_store,
    })
}

/// A valid project request with the given name.
pub fn project_request(name: &str) -> ProjectRequest {
    ProjectRequest {
        name: Some(name.to_owned()),
        description: Some("Shopping list".to_owned()),
        start_date: NaiveDate::from_ymd_opt(2025, 11, 10),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 1),
    }
}

/// A valid task request owned by the given project.
pub fn task_request(title: &str, project_id: i64) -> TaskRequest {
    TaskRequest {
        title: Some(title.to_owned()),
        description: Some("AAA".to_owned()),
        due_date: NaiveDate::from_ymd_opt(2099, 12, 10),
        status: Some(TaskStatus::Todo),
        project_id: Some(project_id),
    }
}
