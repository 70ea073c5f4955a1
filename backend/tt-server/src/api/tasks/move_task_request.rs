use serde::Deserialize;
use uuid::Uuid;

/// Body of `PUT /tasks/{id}/project`; `null` detaches the task
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub project_id: Option<Uuid>,
}
