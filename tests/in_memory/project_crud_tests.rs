//! In-memory integration tests for the project lifecycle.

use super::helpers::{backend, project_request};
use chantier::project::domain::ProjectId;
use chantier::project::services::ProjectServiceError;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_identity_and_round_trips() {
    let backend = backend().expect("backend should wire up");

    let created = backend
        .projects
        .create(project_request("My first Project"))
        .await
        .expect("create should succeed");
    assert_eq!(created.id, 1);

    let fetched = backend
        .projects
        .find_by_id(ProjectId::new(created.id))
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_name_is_rejected_case_insensitively() {
    let backend = backend().expect("backend should wire up");
    backend
        .projects
        .create(project_request("My first Project"))
        .await
        .expect("first create should succeed");

    let result = backend
        .projects
        .create(project_request("MY FIRST PROJECT"))
        .await;
    assert!(matches!(result, Err(ProjectServiceError::DuplicateName)));

    let all = backend
        .projects
        .find_all()
        .await
        .expect("listing should succeed");
    assert_eq!(all.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_renames_into_a_vacated_name() {
    let backend = backend().expect("backend should wire up");
    let first = backend
        .projects
        .create(project_request("Original"))
        .await
        .expect("create should succeed");
    backend
        .projects
        .create(project_request("Second"))
        .await
        .expect("create should succeed");

    backend
        .projects
        .delete(ProjectId::new(first.id))
        .await
        .expect("delete should succeed");

    // Uniqueness is not re-checked on update; the vacated name is free.
    let renamed = backend
        .projects
        .update(ProjectId::new(2), project_request("Original"))
        .await
        .expect("update should succeed");
    assert_eq!(renamed.name, "Original");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_clears_dates_on_full_replace() {
    let backend = backend().expect("backend should wire up");
    let created = backend
        .projects
        .create(project_request("Garden"))
        .await
        .expect("create should succeed");

    let mut replacement = project_request("Garden");
    replacement.start_date = None;
    replacement.end_date = None;
    let updated = backend
        .projects
        .update(ProjectId::new(created.id), replacement)
        .await
        .expect("update should succeed");

    assert_eq!(updated.start_date, None);
    assert_eq!(updated.end_date, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_projects_in_storage_order() {
    let backend = backend().expect("backend should wire up");
    for name in ["First", "Second", "Third"] {
        backend
            .projects
            .create(project_request(name))
            .await
            .expect("create should succeed");
    }

    let all = backend
        .projects
        .find_all()
        .await
        .expect("listing should succeed");
    let names: Vec<&str> = all.iter().map(|project| project.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_project() {
    let backend = backend().expect("backend should wire up");
    let created = backend
        .projects
        .create(project_request("Short lived"))
        .await
        .expect("create should succeed");

    backend
        .projects
        .delete(ProjectId::new(created.id))
        .await
        .expect("delete should succeed");

    let result = backend.projects.find_by_id(ProjectId::new(created.id)).await;
    assert!(matches!(result, Err(ProjectServiceError::IdNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_reports_not_found() {
    let backend = backend().expect("backend should wire up");
    let result = backend.projects.delete(ProjectId::new(404)).await;
    assert!(matches!(
        result,
        Err(ProjectServiceError::NotFoundForDelete(_))
    ));
}
