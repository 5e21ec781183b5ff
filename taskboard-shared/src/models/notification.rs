/// Notification model and dispatcher operations
///
/// Notifications are created as side effects of board mutations (member
/// invited, task assigned, task moved while assigned) and owned by their
/// recipient. The system never sets `read` back to false on its own; only
/// the explicit flag toggle can.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::notification::Notification;
/// # async fn example(pool: sqlx::SqlitePool, user_id: uuid::Uuid) -> Result<(), sqlx::Error> {
/// let unread_before = Notification::list_by_user(&pool, user_id)
///     .await?
///     .iter()
///     .filter(|n| !n.read)
///     .count();
///
/// let updated = Notification::mark_all_read(&pool, user_id).await?;
/// assert_eq!(updated as usize, unread_before);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use uuid::Uuid;

/// Notification row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID
    pub id: Uuid,

    /// Short event title ("Board Invitation", "Task Assigned", "Task Moved")
    pub title: String,

    /// Human-readable description of what happened
    pub description: String,

    /// Recipient
    pub user_id: Uuid,

    /// Whether the recipient has seen it
    pub read: bool,

    /// When the notification was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a notification
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub title: String,
    pub description: String,
    pub user_id: Uuid,
}

impl Notification {
    /// Creates an unread notification
    pub async fn create(
        executor: impl SqliteExecutor<'_>,
        data: CreateNotification,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, title, description, user_id, read, created_at)
            VALUES (?, ?, ?, ?, 0, ?)
            RETURNING id, title, description, user_id, read, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.title)
        .bind(data.description)
        .bind(data.user_id)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
    }

    /// Lists a user's notifications, newest first
    pub async fn list_by_user(
        executor: impl SqliteExecutor<'_>,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, title, description, user_id, read, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Sets the read flag; returns `None` if the notification does not exist
    pub async fn set_read(
        executor: impl SqliteExecutor<'_>,
        id: Uuid,
        read: bool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET read = ?
            WHERE id = ?
            RETURNING id, title, description, user_id, read, created_at
            "#,
        )
        .bind(read)
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Marks every unread notification of a user read in one batch
    ///
    /// Returns the number of rows updated.
    pub async fn mark_all_read(
        executor: impl SqliteExecutor<'_>,
        user_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET read = 1 WHERE user_id = ? AND read = 0")
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a notification; returns false if it did not exist
    pub async fn delete(executor: impl SqliteExecutor<'_>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
