/// Task endpoints
///
/// # Endpoints
///
/// - `POST /tasks` — create in a column, optionally assigned and tagged
/// - `PUT /tasks/:id` — partial update (a present `columnId` is a move,
///   a present `tags` list replaces the whole set, `assigneeId: null`
///   unassigns)
/// - `PUT /tasks/:id/move` — move to another column
/// - `DELETE /tasks/:id`

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{double_option, SuccessResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::engine;
use taskboard_shared::models::task::TaskDetail;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub column_id: Option<Uuid>,
    pub description: Option<String>,
    pub assignee_id: Option<Uuid>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    pub column_id: Option<Uuid>,

    #[serde(default, deserialize_with = "double_option")]
    pub assignee_id: Option<Option<Uuid>>,

    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub column_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskDetail,
}

/// Creates a task
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let (Some(title), Some(column_id)) = (req.title.filter(|t| !t.is_empty()), req.column_id)
    else {
        return Err(ApiError::BadRequest(
            "Title and column ID are required".to_string(),
        ));
    };

    let task = engine::create_task(
        &state.db,
        engine::CreateTaskInput {
            title,
            column_id,
            description: req.description,
            assignee_id: req.assignee_id,
            tags: req.tags.unwrap_or_default(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse { task })))
}

/// Applies a partial update to a task
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = engine::update_task(
        &state.db,
        task_id,
        engine::UpdateTaskInput {
            title: req.title,
            description: req.description,
            column_id: req.column_id,
            assignee_id: req.assignee_id,
            tags: req.tags,
        },
    )
    .await?;

    Ok(Json(TaskResponse { task }))
}

/// Moves a task to another column
pub async fn move_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(req): Json<MoveTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let column_id = req
        .column_id
        .ok_or_else(|| ApiError::BadRequest("Column ID is required".to_string()))?;

    let task = engine::move_task(&state.db, task_id, column_id).await?;

    Ok(Json(TaskResponse { task }))
}

/// Deletes a task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<SuccessResponse>> {
    engine::delete_task(&state.db, task_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
