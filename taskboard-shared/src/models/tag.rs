/// Tag model
///
/// Tags are globally unique by name (case-sensitive) and shared across tasks
/// through the `task_tags` join table. Assignment always goes through
/// [`Tag::upsert`]: one statement that either inserts the name or returns
/// the existing row, so the same name never produces two tag rows even when
/// two tasks are tagged concurrently.

use serde::{Deserialize, Serialize};
use sqlx::SqliteExecutor;
use uuid::Uuid;

/// Tag row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag ID
    pub id: Uuid,

    /// Globally unique name
    pub name: String,
}

impl Tag {
    /// Finds or creates a tag by name
    ///
    /// The conflict clause rewrites `name` to itself so `RETURNING` yields
    /// the existing row instead of nothing.
    pub async fn upsert(
        executor: impl SqliteExecutor<'_>,
        name: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (id, name)
            VALUES (?, ?)
            ON CONFLICT (name) DO UPDATE SET name = excluded.name
            RETURNING id, name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(executor)
        .await
    }

    /// Connects a tag to a task; duplicate links are ignored
    pub async fn link(
        executor: impl SqliteExecutor<'_>,
        task_id: Uuid,
        tag_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?, ?)")
            .bind(task_id)
            .bind(tag_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Removes every tag link from a task (the tag rows themselves stay)
    pub async fn clear_for_task(
        executor: impl SqliteExecutor<'_>,
        task_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM task_tags WHERE task_id = ?")
            .bind(task_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Lists a task's tags by name
    pub async fn list_for_task(
        executor: impl SqliteExecutor<'_>,
        task_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            r#"
            SELECT g.id, g.name
            FROM tags g
            JOIN task_tags tt ON tt.tag_id = g.id
            WHERE tt.task_id = ?
            ORDER BY g.name ASC
            "#,
        )
        .bind(task_id)
        .fetch_all(executor)
        .await
    }
}
