//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            project_id: task.project_id().value(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let id = task.id();
        let changes = TaskChangeset {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            project_id: task.project_id().value(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set(&changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                tasks::table.filter(tasks::id.eq(id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        due_date,
        status: persisted_status,
        project_id,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::invalid_persisted_data)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        due_date,
        status,
        project_id: ProjectId::new(project_id),
    }))
}
