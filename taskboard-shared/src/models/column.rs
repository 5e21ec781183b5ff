/// Column model
///
/// Columns are the ordered workflow buckets of a board. Order is an
/// append-only integer: a new column takes max(existing)+1, or 0 on a board
/// with no columns. Nothing re-packs the sequence when columns are deleted.

use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use uuid::Uuid;

use super::task::TaskDetail;

/// Column row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique column ID
    pub id: Uuid,

    /// Column title
    pub title: String,

    /// Position within the board, ascending
    pub order: i64,

    /// Owning board
    pub board_id: Uuid,
}

/// Column with its tasks in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDetail {
    #[serde(flatten)]
    pub column: Column,
    pub tasks: Vec<TaskDetail>,
}

impl std::ops::Deref for ColumnDetail {
    type Target = Column;

    fn deref(&self) -> &Self::Target {
        &self.column
    }
}

impl Column {
    /// Inserts a column at an explicit position
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
        title: &str,
        order: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Column>(
            r#"
            INSERT INTO columns (id, title, "order", board_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, "order", board_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(order)
        .bind(board_id)
        .fetch_one(executor)
        .await
    }

    /// Next append position for a board: max(order)+1, or 0 with no columns
    pub async fn next_order(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"SELECT COALESCE(MAX("order") + 1, 0) FROM columns WHERE board_id = ?"#,
        )
        .bind(board_id)
        .fetch_one(executor)
        .await
    }

    /// Finds a column by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Column>(
            r#"SELECT id, title, "order", board_id FROM columns WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Renames a column; returns `None` if it does not exist
    pub async fn rename(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
        title: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Column>(
            r#"
            UPDATE columns
            SET title = ?
            WHERE id = ?
            RETURNING id, title, "order", board_id
            "#,
        )
        .bind(title)
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Lists a board's columns in position order
    pub async fn list_by_board(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Column>(
            r#"
            SELECT id, title, "order", board_id
            FROM columns
            WHERE board_id = ?
            ORDER BY "order" ASC, rowid ASC
            "#,
        )
        .bind(board_id)
        .fetch_all(executor)
        .await
    }
}
