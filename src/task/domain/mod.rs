//! Domain model for tasks.

mod status;
mod task;

pub use status::{ParseTaskStatusError, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskId};
