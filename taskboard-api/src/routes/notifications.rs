/// Notification endpoints
///
/// # Endpoints
///
/// - `GET /notifications?userId=` — a user's notifications, newest first
/// - `PUT /notifications/:id` — set the read flag
/// - `PUT /notifications/mark-all-read` — batch-mark a user's unread
/// - `DELETE /notifications/:id`

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::SuccessResponse,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::models::notification::Notification;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotificationRequest {
    pub read: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadRequest {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: Notification,
}

/// Lists a user's notifications, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<NotificationsResponse>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))?;

    let notifications = Notification::list_by_user(&state.db, user_id).await?;

    Ok(Json(NotificationsResponse { notifications }))
}

/// Sets a notification's read flag
pub async fn update_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
    Json(req): Json<UpdateNotificationRequest>,
) -> ApiResult<Json<NotificationResponse>> {
    let read = req
        .read
        .ok_or_else(|| ApiError::BadRequest("Read flag is required".to_string()))?;

    let notification = Notification::set_read(&state.db, notification_id, read)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;

    Ok(Json(NotificationResponse { notification }))
}

/// Marks all of a user's unread notifications read in one batch
pub async fn mark_all_read(
    State(state): State<AppState>,
    Json(req): Json<MarkAllReadRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let user_id = req
        .user_id
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))?;

    Notification::mark_all_read(&state.db, user_id).await?;

    Ok(Json(SuccessResponse::ok()))
}

/// Deletes a notification
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> ApiResult<Json<SuccessResponse>> {
    let deleted = Notification::delete(&state.db, notification_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Notification not found".to_string()));
    }

    Ok(Json(SuccessResponse::ok()))
}
