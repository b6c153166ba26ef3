//! Wire-level contract tests: field names are camelCase, statuses use
//! their canonical uppercase form, and unknown statuses fail at the
//! parsing boundary rather than inside the service.

use super::helpers::{backend, project_request, task_request};
use chantier::project::services::ProjectRequest;
use chantier::task::services::TaskRequest;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_response_uses_contract_field_names() -> eyre::Result<()> {
    let backend = backend()?;
    let created = backend
        .projects
        .create(project_request("My first Project"))
        .await?;

    let json = serde_json::to_value(&created)?;
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "name": "My first Project",
            "description": "Shopping list",
            "startDate": "2025-11-10",
            "endDate": "2025-12-01",
        })
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_response_uses_contract_field_names() -> eyre::Result<()> {
    let backend = backend()?;
    let project = backend.projects.create(project_request("Owner")).await?;
    let task = backend.tasks.create(task_request("XXX", project.id)).await?;

    let json = serde_json::to_value(&task)?;
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "title": "XXX",
            "description": "AAA",
            "dueDate": "2099-12-10",
            "status": "TODO",
            "projectId": project.id,
        })
    );
    Ok(())
}

#[rstest]
fn project_request_parses_contract_field_names() -> eyre::Result<()> {
    let request: ProjectRequest = serde_json::from_str(
        r#"{
            "name": "My first Project",
            "description": "Shopping list",
            "startDate": "2025-11-10",
            "endDate": "2025-12-01"
        }"#,
    )?;

    assert_eq!(request, project_request("My first Project"));
    Ok(())
}

#[rstest]
fn task_request_tolerates_absent_fields() -> eyre::Result<()> {
    // Absence is a service-level validation concern, not a parse failure.
    let request: TaskRequest = serde_json::from_str("{}")?;
    assert_eq!(request, TaskRequest::default());
    Ok(())
}

#[rstest]
fn task_request_rejects_unknown_status_at_the_boundary() {
    let result = serde_json::from_str::<TaskRequest>(
        r#"{
            "title": "XXX",
            "description": "AAA",
            "status": "PENDING",
            "projectId": 6
        }"#,
    );
    assert!(result.is_err());
}
