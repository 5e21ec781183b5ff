/// Column operations

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::board::Board;
use crate::models::column::Column;

/// Appends a column to a board
///
/// The new column takes order max(existing)+1, or 0 on a board with no
/// columns. The read of the current maximum and the insert share one
/// transaction.
///
/// # Errors
///
/// - `Validation` if the title is empty
/// - `NotFound` if the board does not exist
pub async fn add_column(pool: &SqlitePool, board_id: Uuid, title: &str) -> DomainResult<Column> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation(
            "Title and board ID are required".to_string(),
        ));
    }

    Board::find_by_id(pool, board_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Board"))?;

    let mut tx = pool.begin().await?;
    let order = Column::next_order(&mut *tx, board_id).await?;
    let column = Column::insert(&mut *tx, board_id, title, order).await?;
    tx.commit().await?;

    Ok(column)
}

/// Renames a column
///
/// # Errors
///
/// `NotFound` if the column does not exist.
pub async fn rename_column(pool: &SqlitePool, column_id: Uuid, title: &str) -> DomainResult<Column> {
    Column::rename(pool, column_id, title)
        .await?
        .ok_or_else(|| DomainError::not_found("Column"))
}

/// Deletes a column together with its tasks
///
/// The cascade is explicit and transactional: tag links of the column's
/// tasks, then the tasks, then the column row.
///
/// # Errors
///
/// `NotFound` if the column does not exist (nothing is deleted).
pub async fn delete_column(pool: &SqlitePool, column_id: Uuid) -> DomainResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM task_tags WHERE task_id IN (SELECT id FROM tasks WHERE column_id = ?)")
        .bind(column_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM tasks WHERE column_id = ?")
        .bind(column_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM columns WHERE id = ?")
        .bind(column_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DomainError::not_found("Column"));
    }

    tx.commit().await?;
    Ok(())
}
