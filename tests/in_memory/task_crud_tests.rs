//! In-memory integration tests for the task lifecycle.

use super::helpers::{backend, project_request, task_request};
use chantier::project::domain::ProjectId;
use chantier::task::domain::{TaskId, TaskStatus};
use chantier::task::services::TaskServiceError;
use chrono::{Datelike, Utc};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_links_task_to_owning_project() {
    let backend = backend().expect("backend should wire up");
    let project = backend
        .projects
        .create(project_request("Owner"))
        .await
        .expect("project create should succeed");

    let task = backend
        .tasks
        .create(task_request("XXX", project.id))
        .await
        .expect("task create should succeed");

    assert_eq!(task.id, 1);
    assert_eq!(task.project_id, project.id);
    assert_eq!(task.status, TaskStatus::Todo);

    let fetched = backend
        .tasks
        .find_by_id(TaskId::new(task.id))
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_against_missing_project_persists_nothing() {
    let backend = backend().expect("backend should wire up");

    let result = backend.tasks.create(task_request("XXX", 404)).await;
    assert!(matches!(result, Err(TaskServiceError::ProjectNotFound(_))));
    assert!(backend.task_store.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_project_partitions_tasks_between_projects() {
    let backend = backend().expect("backend should wire up");
    let first = backend
        .projects
        .create(project_request("First"))
        .await
        .expect("project create should succeed");
    let second = backend
        .projects
        .create(project_request("Second"))
        .await
        .expect("project create should succeed");

    for title in ["a", "b"] {
        backend
            .tasks
            .create(task_request(title, first.id))
            .await
            .expect("task create should succeed");
    }
    backend
        .tasks
        .create(task_request("c", second.id))
        .await
        .expect("task create should succeed");

    let of_first = backend
        .tasks
        .find_by_project(ProjectId::new(first.id))
        .await
        .expect("listing should succeed");
    assert_eq!(of_first.len(), 2);
    assert!(of_first.iter().all(|task| task.project_id == first.id));

    let of_second = backend
        .tasks
        .find_by_project(ProjectId::new(second.id))
        .await
        .expect("listing should succeed");
    assert_eq!(of_second.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_accepts_past_due_date_while_create_rejects_it() {
    let backend = backend().expect("backend should wire up");
    let project = backend
        .projects
        .create(project_request("Owner"))
        .await
        .expect("project create should succeed");

    let yesterday = Utc::now()
        .date_naive()
        .pred_opt()
        .expect("yesterday exists");

    let mut stale = task_request("XXX", project.id);
    stale.due_date = Some(yesterday);
    let create_result = backend.tasks.create(stale.clone()).await;
    assert!(matches!(
        create_result,
        Err(TaskServiceError::DueDateInPast)
    ));

    let task = backend
        .tasks
        .create(task_request("XXX", project.id))
        .await
        .expect("task create should succeed");
    let updated = backend
        .tasks
        .update(TaskId::new(task.id), stale)
        .await
        .expect("update tolerates past due dates");
    assert_eq!(updated.due_date, Some(yesterday));
    assert_eq!(updated.due_date.map(|d| d.year()), Some(yesterday.year()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_moves_task_between_projects() {
    let backend = backend().expect("backend should wire up");
    let first = backend
        .projects
        .create(project_request("First"))
        .await
        .expect("project create should succeed");
    let second = backend
        .projects
        .create(project_request("Second"))
        .await
        .expect("project create should succeed");

    let task = backend
        .tasks
        .create(task_request("movable", first.id))
        .await
        .expect("task create should succeed");

    let mut replacement = task_request("movable", second.id);
    replacement.status = Some(TaskStatus::Done);
    let moved = backend
        .tasks
        .update(TaskId::new(task.id), replacement)
        .await
        .expect("update should succeed");

    assert_eq!(moved.project_id, second.id);
    assert_eq!(moved.status, TaskStatus::Done);

    let of_first = backend
        .tasks
        .find_by_project(ProjectId::new(first.id))
        .await
        .expect("listing should succeed");
    assert!(of_first.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_only_the_named_task() {
    let backend = backend().expect("backend should wire up");
    let project = backend
        .projects
        .create(project_request("Owner"))
        .await
        .expect("project create should succeed");
    let doomed = backend
        .tasks
        .create(task_request("doomed", project.id))
        .await
        .expect("task create should succeed");
    backend
        .tasks
        .create(task_request("kept", project.id))
        .await
        .expect("task create should succeed");

    backend
        .tasks
        .delete(TaskId::new(doomed.id))
        .await
        .expect("delete should succeed");

    let remaining = backend
        .tasks
        .find_all()
        .await
        .expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining.first().map(|task| task.title.as_str()),
        Some("kept")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_reports_not_found() {
    let backend = backend().expect("backend should wire up");
    let result = backend.tasks.delete(TaskId::new(404)).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::NotFoundForDelete(_))
    ));
}
