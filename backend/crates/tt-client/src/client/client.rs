use crate::{ClientError, ClientResult, TimeEntryListView, TimerView};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for the tt-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub account_id: Option<String>,
    client: ReqwestClient,
}

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum TimeTrackingAction<'a> {
    Start,
    Stop {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<&'a str>,
    },
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8300")
    /// * `account_id` - Optional account ID to send as X-Account-Id
    pub fn new(base_url: &str, account_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id: account_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with optional account ID header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref account_id) = self.account_id {
            req = req.header("X-Account-Id", account_id);
        }

        req
    }

    /// Execute request, mapping error bodies to `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let (code, message) = match body.get("error") {
                Some(error) => (
                    error
                        .get("code")
                        .and_then(|v| v.as_str())
                        .unwrap_or("UNKNOWN")
                        .to_string(),
                    error
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
                None => (format!("HTTP_{}", status.as_u16()), text),
            };
            return Err(ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Get a task snapshot
    pub async fn get_task(&self, id: Uuid) -> ClientResult<TimerView> {
        let req = self.request(Method::GET, &format!("/tasks/{}", id));
        self.execute(req).await
    }

    pub async fn start_task(&self, id: Uuid) -> ClientResult<TimerView> {
        let req = self
            .request(Method::POST, &format!("/tasks/{}/time-tracking", id))
            .json(&TimeTrackingAction::Start);
        self.execute(req).await
    }

    pub async fn stop_task(&self, id: Uuid, description: Option<&str>) -> ClientResult<TimerView> {
        let req = self
            .request(Method::POST, &format!("/tasks/{}/time-tracking", id))
            .json(&TimeTrackingAction::Stop { description });
        self.execute(req).await
    }

    /// Ledger entries for a task, newest first
    pub async fn list_task_time_entries(&self, id: Uuid) -> ClientResult<TimeEntryListView> {
        let req = self.request(Method::GET, &format!("/tasks/{}/time-entries", id));
        self.execute(req).await
    }

    /// Move a task to another project, or out of any project with `None`
    pub async fn move_task(&self, id: Uuid, project_id: Option<Uuid>) -> ClientResult<TimerView> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MoveRequest {
            project_id: Option<Uuid>,
        }

        let req = self
            .request(Method::PUT, &format!("/tasks/{}/project", id))
            .json(&MoveRequest { project_id });
        self.execute(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// Get a project snapshot
    pub async fn get_project(&self, id: Uuid) -> ClientResult<TimerView> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    pub async fn start_project(&self, id: Uuid) -> ClientResult<TimerView> {
        let req = self
            .request(Method::POST, &format!("/projects/{}/time-tracking", id))
            .json(&TimeTrackingAction::Start);
        self.execute(req).await
    }

    pub async fn stop_project(&self, id: Uuid) -> ClientResult<TimerView> {
        let req = self
            .request(Method::POST, &format!("/projects/{}/time-tracking", id))
            .json(&TimeTrackingAction::Stop { description: None });
        self.execute(req).await
    }

    /// Ledger entries for a project and its tasks, newest first
    pub async fn list_project_time_entries(&self, id: Uuid) -> ClientResult<TimeEntryListView> {
        let req = self.request(Method::GET, &format!("/projects/{}/time-entries", id));
        self.execute(req).await
    }
}
