/// Board and membership operations

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::board::{Board, BoardDetail, CreateBoard};
use crate::models::column::Column;
use crate::models::notification::CreateNotification;
use crate::models::user::User;

use super::notify;

/// Every new board starts with these columns, orders 0 through 3
pub const DEFAULT_COLUMN_TITLES: [&str; 4] = ["To Do", "In Progress", "Review", "Done"];

/// Creates a board with its default columns and the owner as first member
///
/// The board row, the four default columns, and the owner membership are
/// written in one transaction: either the whole board exists or none of it
/// does.
///
/// # Errors
///
/// - `Validation` if the title is empty
/// - `NotFound` if the owner does not exist
pub async fn create_board(pool: &SqlitePool, input: CreateBoard) -> DomainResult<BoardDetail> {
    if input.title.trim().is_empty() {
        return Err(DomainError::Validation(
            "Title and user ID are required".to_string(),
        ));
    }

    let owner = User::find_by_id(pool, input.owner_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    let mut tx = pool.begin().await?;

    let board = Board::insert(&mut *tx, input).await?;

    for (order, title) in DEFAULT_COLUMN_TITLES.iter().enumerate() {
        Column::insert(&mut *tx, board.id, title, order as i64).await?;
    }

    Board::insert_member(&mut *tx, board.id, owner.id, "owner").await?;

    tx.commit().await?;

    BoardDetail::find(pool, board.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))
}

/// Partial update of a board's title and description
#[derive(Debug, Clone, Default)]
pub struct UpdateBoard {
    /// New title; absent leaves the current one
    pub title: Option<String>,

    /// Outer `None` leaves the description, `Some(None)` clears it
    pub description: Option<Option<String>>,
}

/// Updates a board's fields, bumping `updated_at`
///
/// # Errors
///
/// `NotFound` if the board does not exist.
pub async fn update_board(
    pool: &SqlitePool,
    board_id: Uuid,
    input: UpdateBoard,
) -> DomainResult<Board> {
    let current = Board::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))?;

    let title = input.title.unwrap_or(current.title);
    let description = match input.description {
        Some(description) => description,
        None => current.description,
    };

    Board::update(pool, board_id, title, description)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))
}

/// Deletes a board and everything it owns
///
/// The cascade is explicit and transactional: tag links of every task in
/// the board's columns, then the tasks, the columns, the memberships, and
/// finally the board row.
///
/// # Errors
///
/// `NotFound` if the board does not exist (nothing is deleted).
pub async fn delete_board(pool: &SqlitePool, board_id: Uuid) -> DomainResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM task_tags
        WHERE task_id IN (
            SELECT t.id FROM tasks t
            JOIN columns c ON c.id = t.column_id
            WHERE c.board_id = ?
        )
        "#,
    )
    .bind(board_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM tasks WHERE column_id IN (SELECT id FROM columns WHERE board_id = ?)")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM columns WHERE board_id = ?")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM board_members WHERE board_id = ?")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;

    if !Board::delete(&mut *tx, board_id).await? {
        return Err(DomainError::not_found("Board"));
    }

    tx.commit().await?;
    Ok(())
}

/// Invites a user (looked up by email) onto a board
///
/// Emits a "Board Invitation" notification to the invitee once the
/// membership has committed.
///
/// # Errors
///
/// - `NotFound` if no user has that email, or the board does not exist
/// - `Conflict` if the user is already a member
pub async fn add_member(
    pool: &SqlitePool,
    board_id: Uuid,
    email: &str,
    role: Option<&str>,
) -> DomainResult<BoardDetail> {
    let user = User::find_by_email(pool, email)
        .await?
        .ok_or_else(|| DomainError::not_found("User"))?;

    let board = Board::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))?;

    if Board::is_member(pool, board.id, user.id).await? {
        return Err(DomainError::Conflict(
            "User is already a member of this board".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;
    Board::insert_member(&mut *tx, board.id, user.id, role.unwrap_or("member")).await?;
    Board::touch(&mut *tx, board.id).await?;
    tx.commit().await?;

    notify(
        pool,
        CreateNotification {
            title: "Board Invitation".to_string(),
            description: format!(
                "You've been invited to collaborate on board \"{}\"",
                board.title
            ),
            user_id: user.id,
        },
    )
    .await;

    BoardDetail::find(pool, board.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))
}

/// Disconnects a member from a board
///
/// Removing a user who is not a member is a no-op, not an error.
///
/// # Errors
///
/// `NotFound` if the board does not exist.
pub async fn remove_member(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> DomainResult<BoardDetail> {
    let board = Board::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))?;

    let mut tx = pool.begin().await?;
    let removed = Board::delete_member(&mut *tx, board.id, user_id).await?;
    if removed {
        Board::touch(&mut *tx, board.id).await?;
    }
    tx.commit().await?;

    BoardDetail::find(pool, board.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))
}
