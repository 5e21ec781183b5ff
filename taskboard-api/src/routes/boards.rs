/// Board endpoints
///
/// # Endpoints
///
/// - `GET /boards?userId=` — boards the user owns or is a member of
/// - `POST /boards` — create a board (with its default columns)
/// - `GET/PUT/DELETE /boards/:id`
/// - `POST /boards/:id/members` — invite by email
/// - `DELETE /boards/:id/members?userId=` — remove a member

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{double_option, SuccessResponse},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::engine;
use taskboard_shared::models::board::{Board, BoardDetail, CreateBoard};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BoardsResponse {
    pub boards: Vec<BoardDetail>,
}

#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    pub board: BoardDetail,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: Board,
}

/// Lists a user's boards, most recently updated first
pub async fn list_boards(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<BoardsResponse>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))?;

    let boards = BoardDetail::list_for_user(&state.db, user_id).await?;

    Ok(Json(BoardsResponse { boards }))
}

/// Creates a board with its default columns
pub async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> ApiResult<(StatusCode, Json<BoardDetailResponse>)> {
    let (Some(title), Some(user_id)) = (req.title.filter(|t| !t.is_empty()), req.user_id) else {
        return Err(ApiError::BadRequest(
            "Title and user ID are required".to_string(),
        ));
    };

    let board = engine::create_board(
        &state.db,
        CreateBoard {
            title,
            description: req.description,
            owner_id: user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(BoardDetailResponse { board })))
}

/// Fetches one board fully nested
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> ApiResult<Json<BoardDetailResponse>> {
    let board = BoardDetail::find(&state.db, board_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Board not found".to_string()))?;

    Ok(Json(BoardDetailResponse { board }))
}

/// Updates a board's title and description
pub async fn update_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(req): Json<UpdateBoardRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let board = engine::update_board(
        &state.db,
        board_id,
        engine::UpdateBoard {
            title: req.title,
            description: req.description,
        },
    )
    .await?;

    Ok(Json(BoardResponse { board }))
}

/// Deletes a board and everything in it
pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> ApiResult<Json<SuccessResponse>> {
    engine::delete_board(&state.db, board_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Invites a user onto a board by email
pub async fn add_member(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(req): Json<AddMemberRequest>,
) -> ApiResult<Json<BoardDetailResponse>> {
    let email = req
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;

    let board = engine::add_member(&state.db, board_id, &email, req.role.as_deref()).await?;

    Ok(Json(BoardDetailResponse { board }))
}

/// Removes a member from a board
pub async fn remove_member(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Json<BoardDetailResponse>> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))?;

    let board = engine::remove_member(&state.db, board_id, user_id).await?;

    Ok(Json(BoardDetailResponse { board }))
}
