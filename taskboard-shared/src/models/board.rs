/// Board model, memberships, and the nested board view
///
/// A board owns its columns and, through them, its tasks. Members are users
/// connected through the `board_members` join table; the owner is always
/// connected as a member at creation time. [`BoardDetail`] is the fully
/// nested read shape the API serves and the client mirrors: board + owner +
/// members + columns, each column with its tasks, each task with tags and
/// an optional assignee.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use super::column::{Column, ColumnDetail};
use super::tag::Tag;
use super::task::{Task, TaskDetail};
use super::user::UserSummary;

/// Board row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique board ID
    pub id: Uuid,

    /// Board title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Owning user; always also a member
    pub owner_id: Uuid,

    /// When the board was created
    pub created_at: DateTime<Utc>,

    /// When the board was last updated; bumped by board edits and
    /// member changes, and used to order the board list (newest first)
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new board
#[derive(Debug, Clone)]
pub struct CreateBoard {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
}

/// Fully nested board as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub owner: UserSummary,
    pub members: Vec<UserSummary>,
    pub columns: Vec<ColumnDetail>,
}

impl std::ops::Deref for BoardDetail {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

impl Board {
    /// Inserts a bare board row (no columns, no members)
    ///
    /// Callers normally go through the engine's `create_board`, which also
    /// provisions the default columns and the owner membership.
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        data: CreateBoard,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO boards (id, title, description, owner_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, owner_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.title)
        .bind(data.description)
        .bind(data.owner_id)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
    }

    /// Finds a board by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            "SELECT id, title, description, owner_id, created_at, updated_at FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Updates title and description, bumping `updated_at`
    ///
    /// Returns `None` if the board does not exist.
    pub async fn update(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
        title: String,
        description: Option<String>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            r#"
            UPDATE boards
            SET title = ?, description = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, title, description, owner_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Bumps `updated_at` without changing any field
    pub async fn touch(executor: impl SqliteExecutor<'_>, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE boards SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Deletes the bare board row
    ///
    /// Returns false if the board did not exist. Dependent rows are removed
    /// by the engine's explicit cascade, not here.
    pub async fn delete(executor: impl SqliteExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Checks whether a user is connected as a member
    pub async fn is_member(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM board_members WHERE board_id = ? AND user_id = ?)",
        )
        .bind(board_id)
        .bind(user_id)
        .fetch_one(executor)
        .await
    }

    /// Connects a user as a member with the given role string
    pub async fn insert_member(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
        user_id: Uuid,
        role: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO board_members (board_id, user_id, role, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(board_id)
        .bind(user_id)
        .bind(role)
        .bind(Utc::now())
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Disconnects a member; affecting zero rows is not an error
    pub async fn delete_member(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM board_members WHERE board_id = ? AND user_id = ?")
            .bind(board_id)
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lists members in join order
    pub async fn members(
        executor: impl SqliteExecutor<'_>,
        board_id: Uuid,
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.first_name, u.last_name, u.email
            FROM users u
            JOIN board_members m ON m.user_id = u.id
            WHERE m.board_id = ?
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(board_id)
        .fetch_all(executor)
        .await
    }
}

/// Tag row joined back to its task, used when loading a whole board
#[derive(Debug, sqlx::FromRow)]
struct TaskTagRow {
    task_id: Uuid,
    id: Uuid,
    name: String,
}

impl BoardDetail {
    /// Loads the nested view of one board
    pub async fn find(pool: &SqlitePool, board_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        match Board::find_by_id(pool, board_id).await? {
            Some(board) => Ok(Some(Self::load(pool, board).await?)),
            None => Ok(None),
        }
    }

    /// Lists every board the user owns or is a member of, most recently
    /// updated first, each fully nested
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let boards = sqlx::query_as::<_, Board>(
            r#"
            SELECT id, title, description, owner_id, created_at, updated_at
            FROM boards
            WHERE owner_id = ?
               OR id IN (SELECT board_id FROM board_members WHERE user_id = ?)
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let mut details = Vec::with_capacity(boards.len());
        for board in boards {
            details.push(Self::load(pool, board).await?);
        }
        Ok(details)
    }

    async fn load(pool: &SqlitePool, board: Board) -> Result<Self, sqlx::Error> {
        let owner = UserSummary::find(pool, board.owner_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        let members = Board::members(pool, board.id).await?;
        let columns = Column::list_by_board(pool, board.id).await?;

        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.title, t.description, t.column_id, t.assignee_id, t.created_at, t.updated_at
            FROM tasks t
            JOIN columns c ON c.id = t.column_id
            WHERE c.board_id = ?
            ORDER BY t.created_at ASC, t.rowid ASC
            "#,
        )
        .bind(board.id)
        .fetch_all(pool)
        .await?;

        let tag_rows = sqlx::query_as::<_, TaskTagRow>(
            r#"
            SELECT tt.task_id, g.id, g.name
            FROM task_tags tt
            JOIN tags g ON g.id = tt.tag_id
            JOIN tasks t ON t.id = tt.task_id
            JOIN columns c ON c.id = t.column_id
            WHERE c.board_id = ?
            ORDER BY g.name ASC
            "#,
        )
        .bind(board.id)
        .fetch_all(pool)
        .await?;

        let assignees = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT DISTINCT u.id, u.first_name, u.last_name, u.email
            FROM users u
            JOIN tasks t ON t.assignee_id = u.id
            JOIN columns c ON c.id = t.column_id
            WHERE c.board_id = ?
            "#,
        )
        .bind(board.id)
        .fetch_all(pool)
        .await?;

        let mut tags_by_task: HashMap<Uuid, Vec<Tag>> = HashMap::new();
        for row in tag_rows {
            tags_by_task.entry(row.task_id).or_default().push(Tag {
                id: row.id,
                name: row.name,
            });
        }

        let assignee_by_id: HashMap<Uuid, UserSummary> =
            assignees.into_iter().map(|u| (u.id, u)).collect();

        let mut tasks_by_column: HashMap<Uuid, Vec<TaskDetail>> = HashMap::new();
        for task in tasks {
            let column_id = task.column_id;
            let detail = TaskDetail {
                assignee: task
                    .assignee_id
                    .and_then(|id| assignee_by_id.get(&id).cloned()),
                tags: tags_by_task.remove(&task.id).unwrap_or_default(),
                task,
            };
            tasks_by_column.entry(column_id).or_default().push(detail);
        }

        let columns = columns
            .into_iter()
            .map(|column| ColumnDetail {
                tasks: tasks_by_column.remove(&column.id).unwrap_or_default(),
                column,
            })
            .collect();

        Ok(BoardDetail {
            board,
            owner,
            members,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_json_uses_camel_case() {
        let board = Board {
            id: Uuid::new_v4(),
            title: "Sprint".to_string(),
            description: None,
            owner_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("owner_id").is_none());
    }
}
