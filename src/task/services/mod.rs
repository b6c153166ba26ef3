//! Validation and mapping services for tasks.

mod crud;

pub use crud::{TaskRequest, TaskResponse, TaskService, TaskServiceError, TaskServiceResult};
