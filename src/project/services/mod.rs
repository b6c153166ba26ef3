//! Validation and mapping services for projects.

mod crud;

pub use crud::{
    ProjectRequest, ProjectResponse, ProjectService, ProjectServiceError, ProjectServiceResult,
};
