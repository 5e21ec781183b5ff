/// Typed HTTP client for the taskboard API
///
/// One method per server route. Failures carry the server's `error` message
/// verbatim; transport failures and unparseable bodies collapse to
/// "An unexpected error occurred", which is all a UI can usefully show for
/// them. No retries: a call either completes or fails outright.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use taskboard_shared::models::board::{Board, BoardDetail};
use taskboard_shared::models::column::Column;
use taskboard_shared::models::notification::Notification;
use taskboard_shared::models::task::TaskDetail;
use taskboard_shared::models::user::UserPublic;

/// Error surfaced to the state store
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiClientError {
    /// Single-line message, shown to the user as-is
    pub message: String,
}

impl ApiClientError {
    fn unexpected() -> Self {
        ApiClientError {
            message: "An unexpected error occurred".to_string(),
        }
    }
}

/// Registration input
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Task creation input
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub column_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial task update
///
/// Outer `None` omits the field entirely; `Some(None)` serializes an
/// explicit `null` (clear description / unassign).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: UserPublic,
}

#[derive(Deserialize)]
struct BoardsEnvelope {
    boards: Vec<BoardDetail>,
}

#[derive(Deserialize)]
struct BoardDetailEnvelope {
    board: BoardDetail,
}

#[derive(Deserialize)]
struct BoardEnvelope {
    board: Board,
}

#[derive(Deserialize)]
struct ColumnEnvelope {
    column: Column,
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: TaskDetail,
}

#[derive(Deserialize)]
struct NotificationsEnvelope {
    notifications: Vec<Notification>,
}

#[derive(Deserialize)]
struct NotificationEnvelope {
    notification: Notification,
}

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (e.g. "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ApiClientError> {
        let response = response.map_err(|_| ApiClientError::unexpected())?;

        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|_| ApiClientError::unexpected())
        } else {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("An unexpected error occurred")
                .to_string();
            Err(ApiClientError { message })
        }
    }

    // Auth

    pub async fn login(&self, email: &str, password: &str) -> Result<UserPublic, ApiClientError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await;
        Self::parse::<UserEnvelope>(response).await.map(|e| e.user)
    }

    pub async fn register(&self, input: RegisterInput) -> Result<UserPublic, ApiClientError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&input)
            .send()
            .await;
        Self::parse::<UserEnvelope>(response).await.map(|e| e.user)
    }

    // Boards

    pub async fn fetch_boards(&self, user_id: Uuid) -> Result<Vec<BoardDetail>, ApiClientError> {
        let response = self
            .http
            .get(self.url(&format!("/boards?userId={user_id}")))
            .send()
            .await;
        Self::parse::<BoardsEnvelope>(response).await.map(|e| e.boards)
    }

    pub async fn fetch_board(&self, board_id: Uuid) -> Result<BoardDetail, ApiClientError> {
        let response = self
            .http
            .get(self.url(&format!("/boards/{board_id}")))
            .send()
            .await;
        Self::parse::<BoardDetailEnvelope>(response).await.map(|e| e.board)
    }

    pub async fn create_board(
        &self,
        title: &str,
        description: &str,
        user_id: Uuid,
    ) -> Result<BoardDetail, ApiClientError> {
        let response = self
            .http
            .post(self.url("/boards"))
            .json(&json!({ "title": title, "description": description, "userId": user_id }))
            .send()
            .await;
        Self::parse::<BoardDetailEnvelope>(response).await.map(|e| e.board)
    }

    pub async fn update_board(
        &self,
        board_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Board, ApiClientError> {
        let response = self
            .http
            .put(self.url(&format!("/boards/{board_id}")))
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await;
        Self::parse::<BoardEnvelope>(response).await.map(|e| e.board)
    }

    pub async fn delete_board(&self, board_id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/boards/{board_id}")))
            .send()
            .await;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    pub async fn invite_member(
        &self,
        board_id: Uuid,
        email: &str,
        role: &str,
    ) -> Result<BoardDetail, ApiClientError> {
        let response = self
            .http
            .post(self.url(&format!("/boards/{board_id}/members")))
            .json(&json!({ "email": email, "role": role }))
            .send()
            .await;
        Self::parse::<BoardDetailEnvelope>(response).await.map(|e| e.board)
    }

    pub async fn remove_member(
        &self,
        board_id: Uuid,
        user_id: Uuid,
    ) -> Result<BoardDetail, ApiClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/boards/{board_id}/members?userId={user_id}")))
            .send()
            .await;
        Self::parse::<BoardDetailEnvelope>(response).await.map(|e| e.board)
    }

    // Columns

    pub async fn add_column(&self, title: &str, board_id: Uuid) -> Result<Column, ApiClientError> {
        let response = self
            .http
            .post(self.url("/columns"))
            .json(&json!({ "title": title, "boardId": board_id }))
            .send()
            .await;
        Self::parse::<ColumnEnvelope>(response).await.map(|e| e.column)
    }

    pub async fn rename_column(
        &self,
        column_id: Uuid,
        title: &str,
    ) -> Result<Column, ApiClientError> {
        let response = self
            .http
            .put(self.url(&format!("/columns/{column_id}")))
            .json(&json!({ "title": title }))
            .send()
            .await;
        Self::parse::<ColumnEnvelope>(response).await.map(|e| e.column)
    }

    pub async fn delete_column(&self, column_id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/columns/{column_id}")))
            .send()
            .await;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    // Tasks

    pub async fn create_task(&self, task: NewTask) -> Result<TaskDetail, ApiClientError> {
        let response = self.http.post(self.url("/tasks")).json(&task).send().await;
        Self::parse::<TaskEnvelope>(response).await.map(|e| e.task)
    }

    pub async fn update_task(
        &self,
        task_id: Uuid,
        changes: TaskChanges,
    ) -> Result<TaskDetail, ApiClientError> {
        let response = self
            .http
            .put(self.url(&format!("/tasks/{task_id}")))
            .json(&changes)
            .send()
            .await;
        Self::parse::<TaskEnvelope>(response).await.map(|e| e.task)
    }

    pub async fn move_task(
        &self,
        task_id: Uuid,
        column_id: Uuid,
    ) -> Result<TaskDetail, ApiClientError> {
        let response = self
            .http
            .put(self.url(&format!("/tasks/{task_id}/move")))
            .json(&json!({ "columnId": column_id }))
            .send()
            .await;
        Self::parse::<TaskEnvelope>(response).await.map(|e| e.task)
    }

    pub async fn delete_task(&self, task_id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/tasks/{task_id}")))
            .send()
            .await;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    // Notifications

    pub async fn fetch_notifications(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, ApiClientError> {
        let response = self
            .http
            .get(self.url(&format!("/notifications?userId={user_id}")))
            .send()
            .await;
        Self::parse::<NotificationsEnvelope>(response)
            .await
            .map(|e| e.notifications)
    }

    pub async fn mark_notification_read(
        &self,
        notification_id: Uuid,
    ) -> Result<Notification, ApiClientError> {
        let response = self
            .http
            .put(self.url(&format!("/notifications/{notification_id}")))
            .json(&json!({ "read": true }))
            .send()
            .await;
        Self::parse::<NotificationEnvelope>(response)
            .await
            .map(|e| e.notification)
    }

    pub async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .put(self.url("/notifications/mark-all-read"))
            .json(&json!({ "userId": user_id }))
            .send()
            .await;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    pub async fn delete_notification(&self, notification_id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/notifications/{notification_id}")))
            .send()
            .await;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/boards"), "http://localhost:8080/boards");
    }

    #[test]
    fn test_task_changes_distinguish_null_from_absent() {
        let unassign = TaskChanges {
            assignee_id: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&unassign).unwrap();
        assert!(json.get("assigneeId").is_some());
        assert_eq!(json["assigneeId"], serde_json::Value::Null);

        let untouched = TaskChanges::default();
        let json = serde_json::to_value(&untouched).unwrap();
        assert!(json.get("assigneeId").is_none());
    }
}
