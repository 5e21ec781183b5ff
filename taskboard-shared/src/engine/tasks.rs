/// Task lifecycle operations
///
/// A task's `column_id` is its state. Moves are unrestricted: any column of
/// any board is reachable, the "To Do → Done" progression is a UI
/// convention the server does not check.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::board::Board;
use crate::models::column::Column;
use crate::models::notification::CreateNotification;
use crate::models::tag::Tag;
use crate::models::task::{Task, TaskDetail};
use crate::models::user::User;

use super::notify;

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub column_id: Uuid,
    pub description: Option<String>,
    pub assignee_id: Option<Uuid>,
    /// Tag names, resolved find-or-create
    pub tags: Vec<String>,
}

/// Partial update of a task
///
/// The double options distinguish "field absent, leave it alone" from
/// "explicitly null, clear it".
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    /// Present means reconnect the task to this column (a move)
    pub column_id: Option<Uuid>,
    /// `Some(None)` unassigns, `Some(Some(id))` reassigns
    pub assignee_id: Option<Option<Uuid>>,
    /// Present means replace the entire tag set, not merge
    pub tags: Option<Vec<String>>,
}

/// Creates a task in a column
///
/// Tags are upserted by name and linked in the same transaction as the
/// task insert. If the task is created with an assignee, a "Task Assigned"
/// notification is emitted to that user after the commit.
///
/// # Errors
///
/// - `Validation` if the title is empty
/// - `NotFound` if the column or the assignee does not exist
pub async fn create_task(pool: &SqlitePool, input: CreateTaskInput) -> DomainResult<TaskDetail> {
    if input.title.trim().is_empty() {
        return Err(DomainError::Validation(
            "Title and column ID are required".to_string(),
        ));
    }

    let column = Column::find_by_id(pool, input.column_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Column"))?;

    if let Some(assignee_id) = input.assignee_id {
        User::find_by_id(pool, assignee_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
    }

    let mut tx = pool.begin().await?;

    let task = Task::insert(
        &mut *tx,
        &input.title,
        input.description.as_deref(),
        column.id,
        input.assignee_id,
    )
    .await?;

    for name in &input.tags {
        let tag = Tag::upsert(&mut *tx, name).await?;
        Tag::link(&mut *tx, task.id, tag.id).await?;
    }

    tx.commit().await?;

    if let Some(assignee_id) = task.assignee_id {
        if let Some(board) = Board::find_by_id(pool, column.board_id).await? {
            notify(
                pool,
                CreateNotification {
                    title: "Task Assigned".to_string(),
                    description: format!(
                        "You've been assigned to \"{}\" in board \"{}\"",
                        task.title, board.title
                    ),
                    user_id: assignee_id,
                },
            )
            .await;
        }
    }

    TaskDetail::find(pool, task.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))
}

/// Applies a partial update to a task
///
/// A present `column_id` reconnects the task (an unvalidated move). A
/// present tag list replaces the whole set inside the update's transaction.
/// When the assignee changes to a new non-null user, a "Task Assigned"
/// notification is emitted after the commit; the board it names is resolved
/// through the request's column when one was given, else the task's stored
/// prior column.
///
/// # Errors
///
/// `NotFound` if the task, a referenced column, or a referenced assignee
/// does not exist.
pub async fn update_task(
    pool: &SqlitePool,
    task_id: Uuid,
    input: UpdateTaskInput,
) -> DomainResult<TaskDetail> {
    let UpdateTaskInput {
        title,
        description,
        column_id,
        assignee_id,
        tags,
    } = input;

    let current = Task::find_by_id(pool, task_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))?;

    if let Some(column_id) = column_id {
        Column::find_by_id(pool, column_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Column"))?;
    }

    if let Some(Some(assignee_id)) = assignee_id {
        User::find_by_id(pool, assignee_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
    }

    let previous_assignee = current.assignee_id;
    let previous_column = current.column_id;

    let new_title = title.unwrap_or(current.title);
    let new_description = match description {
        Some(description) => description,
        None => current.description,
    };
    let new_column = column_id.unwrap_or(current.column_id);
    let new_assignee = match assignee_id {
        Some(assignee) => assignee,
        None => current.assignee_id,
    };

    let mut tx = pool.begin().await?;

    let task = Task::update_row(
        &mut *tx,
        task_id,
        &new_title,
        new_description.as_deref(),
        new_column,
        new_assignee,
    )
    .await?
    .ok_or_else(|| DomainError::not_found("Task"))?;

    if let Some(tags) = &tags {
        Tag::clear_for_task(&mut *tx, task.id).await?;
        for name in tags {
            let tag = Tag::upsert(&mut *tx, name).await?;
            Tag::link(&mut *tx, task.id, tag.id).await?;
        }
    }

    tx.commit().await?;

    if let Some(Some(assignee_id)) = assignee_id {
        if previous_assignee != Some(assignee_id) {
            let lookup_column = column_id.unwrap_or(previous_column);
            if let Some(column) = Column::find_by_id(pool, lookup_column).await? {
                if let Some(board) = Board::find_by_id(pool, column.board_id).await? {
                    notify(
                        pool,
                        CreateNotification {
                            title: "Task Assigned".to_string(),
                            description: format!(
                                "You've been assigned to \"{}\" in board \"{}\"",
                                task.title, board.title
                            ),
                            user_id: assignee_id,
                        },
                    )
                    .await;
                }
            }
        }
    }

    TaskDetail::find(pool, task.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))
}

/// Moves a task to another column
///
/// If the task has an assignee, a "Task Moved" notification naming the
/// destination column and its board is emitted after the move commits.
///
/// # Errors
///
/// `NotFound` if the task or the destination column does not exist.
pub async fn move_task(
    pool: &SqlitePool,
    task_id: Uuid,
    column_id: Uuid,
) -> DomainResult<TaskDetail> {
    Task::find_by_id(pool, task_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))?;

    let column = Column::find_by_id(pool, column_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Column"))?;

    let task = Task::set_column(pool, task_id, column.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))?;

    if let Some(assignee_id) = task.assignee_id {
        if let Some(board) = Board::find_by_id(pool, column.board_id).await? {
            notify(
                pool,
                CreateNotification {
                    title: "Task Moved".to_string(),
                    description: format!(
                        "Task \"{}\" has been moved to \"{}\" in board \"{}\"",
                        task.title, column.title, board.title
                    ),
                    user_id: assignee_id,
                },
            )
            .await;
        }
    }

    TaskDetail::find(pool, task.id)
        .await?
        .ok_or_else(|| DomainError::not_found("Task"))
}

/// Deletes a task and its tag links in one transaction
///
/// # Errors
///
/// `NotFound` if the task does not exist.
pub async fn delete_task(pool: &SqlitePool, task_id: Uuid) -> DomainResult<()> {
    let mut tx = pool.begin().await?;

    Tag::clear_for_task(&mut *tx, task_id).await?;

    if !Task::delete(&mut *tx, task_id).await? {
        return Err(DomainError::not_found("Task"));
    }

    tx.commit().await?;
    Ok(())
}
