/// Task model and the nested task view
///
/// A task belongs to exactly one column at any time: `column_id` is the
/// task's state, and moving a task is an update of that single field. The
/// engine owns the multi-table parts (tag links, notifications); this module
/// is the row itself plus the [`TaskDetail`] read shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use super::tag::Tag;
use super::user::UserSummary;

/// Task row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Task title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// The single column that owns this task
    pub column_id: Uuid,

    /// Optional assignee
    pub assignee_id: Option<Uuid>,

    /// When the task was created; tasks list in creation order
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Task with its tags and assignee, as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub assignee: Option<UserSummary>,
    pub tags: Vec<Tag>,
}

impl std::ops::Deref for TaskDetail {
    type Target = Task;

    fn deref(&self) -> &Self::Target {
        &self.task
    }
}

impl Task {
    /// Inserts a task row (tag links are the engine's job)
    pub async fn insert(
        executor: impl SqliteExecutor<'_>,
        title: &str,
        description: Option<&str>,
        column_id: Uuid,
        assignee_id: Option<Uuid>,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description, column_id, assignee_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, column_id, assignee_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(column_id)
        .bind(assignee_id)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await
    }

    /// Finds a task by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, column_id, assignee_id, created_at, updated_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Writes every mutable field at once
    ///
    /// The engine resolves partial input against the current row first, so
    /// the SQL stays a single static statement.
    pub async fn update_row(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        column_id: Uuid,
        assignee_id: Option<Uuid>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, column_id = ?, assignee_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, title, description, column_id, assignee_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(column_id)
        .bind(assignee_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Reconnects the task to a different column (a move)
    pub async fn set_column(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
        column_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET column_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, title, description, column_id, assignee_id, created_at, updated_at
            "#,
        )
        .bind(column_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Deletes the task row; tag links are removed by the engine's cascade
    pub async fn delete(executor: impl SqliteExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl TaskDetail {
    /// Loads one task with its tags and assignee summary
    pub async fn find(pool: &SqlitePool, task_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let Some(task) = Task::find_by_id(pool, task_id).await? else {
            return Ok(None);
        };

        let tags = Tag::list_for_task(pool, task.id).await?;

        let assignee = match task.assignee_id {
            Some(user_id) => UserSummary::find(pool, user_id).await?,
            None => None,
        };

        Ok(Some(TaskDetail {
            task,
            assignee,
            tags,
        }))
    }
}
