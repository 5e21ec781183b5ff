/// Column endpoints
///
/// # Endpoints
///
/// - `POST /columns` — append a column to a board
/// - `PUT /columns/:id` — rename
/// - `DELETE /columns/:id` — delete, cascading to the column's tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::SuccessResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::engine;
use taskboard_shared::models::column::Column;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnRequest {
    pub title: Option<String>,
    pub board_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ColumnResponse {
    pub column: Column,
}

/// Appends a column at the board's next order position
pub async fn create_column(
    State(state): State<AppState>,
    Json(req): Json<CreateColumnRequest>,
) -> ApiResult<(StatusCode, Json<ColumnResponse>)> {
    let (Some(title), Some(board_id)) = (req.title.filter(|t| !t.is_empty()), req.board_id) else {
        return Err(ApiError::BadRequest(
            "Title and board ID are required".to_string(),
        ));
    };

    let column = engine::add_column(&state.db, board_id, &title).await?;

    Ok((StatusCode::CREATED, Json(ColumnResponse { column })))
}

/// Renames a column
pub async fn update_column(
    State(state): State<AppState>,
    Path(column_id): Path<Uuid>,
    Json(req): Json<UpdateColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let title = req
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Title is required".to_string()))?;

    let column = engine::rename_column(&state.db, column_id, &title).await?;

    Ok(Json(ColumnResponse { column }))
}

/// Deletes a column and its tasks
pub async fn delete_column(
    State(state): State<AppState>,
    Path(column_id): Path<Uuid>,
) -> ApiResult<Json<SuccessResponse>> {
    engine::delete_column(&state.db, column_id).await?;
    Ok(Json(SuccessResponse::ok()))
}
