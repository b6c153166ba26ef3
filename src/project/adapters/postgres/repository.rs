//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, ProjectChangeset, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{NewProject, PersistedProjectData, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

diesel::define_sql_function! {
    /// SQL `lower()`, used for the case-insensitive name uniqueness probe.
    fn lower(value: diesel::sql_types::Varchar) -> diesel::sql_types::Varchar;
}

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
///
/// Cascade removal of dependent tasks is enforced by the schema's
/// `ON DELETE CASCADE` foreign key, not by this adapter.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_project).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(row.map(row_to_project))
        })
        .await
    }

    async fn insert(&self, project: &NewProject) -> ProjectRepositoryResult<Project> {
        let new_row = NewProjectRow {
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(row_to_project(row))
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let id = project.id();
        let changes = ProjectChangeset {
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(projects::table.filter(projects::id.eq(id.value())))
                .set(&changes)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?
                .ok_or(ProjectRepositoryError::NotFound(id))?;
            Ok(row_to_project(row))
        })
        .await
    }

    async fn exists_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                projects::table.filter(projects::id.eq(id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(ProjectRepositoryError::persistence)
        })
        .await
    }

    async fn exists_by_name_ignore_case(&self, name: &str) -> ProjectRepositoryResult<bool> {
        let needle = name.to_lowercase();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                projects::table.filter(lower(projects::name).eq(needle)),
            ))
            .get_result::<bool>(connection)
            .map_err(ProjectRepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(projects::table.filter(projects::id.eq(id.value())))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_project(row: ProjectRow) -> Project {
    let ProjectRow {
        id,
        name,
        description,
        start_date,
        end_date,
    } = row;
    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id),
        name,
        description,
        start_date,
        end_date,
    })
}
