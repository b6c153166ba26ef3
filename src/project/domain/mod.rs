//! Domain model for projects.
//!
//! Projects are plain persisted records; all input validation lives in the
//! service layer so that guard ordering (field checks before storage
//! lookups) stays in one place.

mod project;

pub use project::{NewProject, PersistedProjectData, Project, ProjectId};
