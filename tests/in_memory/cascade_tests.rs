//! Cascade-delete behaviour: a project takes its tasks with it.

use super::helpers::{backend, project_request, task_request};
use chantier::project::domain::ProjectId;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_removes_its_tasks() {
    let backend = backend().expect("backend should wire up");
    let doomed = backend
        .projects
        .create(project_request("Doomed"))
        .await
        .expect("project create should succeed");
    let kept = backend
        .projects
        .create(project_request("Kept"))
        .await
        .expect("project create should succeed");

    for title in ["a", "b"] {
        backend
            .tasks
            .create(task_request(title, doomed.id))
            .await
            .expect("task create should succeed");
    }
    backend
        .tasks
        .create(task_request("c", kept.id))
        .await
        .expect("task create should succeed");
    assert_eq!(backend.task_store.len(), 3);

    backend
        .projects
        .delete(ProjectId::new(doomed.id))
        .await
        .expect("delete should succeed");

    let remaining = backend
        .tasks
        .find_all()
        .await
        .expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|task| task.project_id == kept.id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cascade_leaves_unrelated_projects_untouched() {
    let backend = backend().expect("backend should wire up");
    let first = backend
        .projects
        .create(project_request("First"))
        .await
        .expect("project create should succeed");
    backend
        .projects
        .create(project_request("Second"))
        .await
        .expect("project create should succeed");

    backend
        .projects
        .delete(ProjectId::new(first.id))
        .await
        .expect("delete should succeed");

    let all = backend
        .projects
        .find_all()
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(
        all.first().map(|project| project.name.as_str()),
        Some("Second")
    );
}
