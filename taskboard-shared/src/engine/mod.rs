/// Board mutation engine
///
/// Implements the multi-table operations behind the API: board creation
/// with default columns, membership changes, column append/rename/delete,
/// and the task lifecycle (create, partial update, move, delete) with tag
/// resolution and notification emission.
///
/// Every operation that writes more than one table runs inside a single
/// transaction. Notifications are emitted only after that transaction has
/// committed, and a notification failure never fails the request — see
/// [`notify`].
///
/// # Modules
///
/// - `boards`: board CRUD and membership operations
/// - `columns`: column append, rename, and cascading delete
/// - `tasks`: task lifecycle and tag set replacement

pub mod boards;
pub mod columns;
pub mod tasks;

pub use boards::{
    add_member, create_board, delete_board, remove_member, update_board, UpdateBoard,
    DEFAULT_COLUMN_TITLES,
};
pub use columns::{add_column, delete_column, rename_column};
pub use tasks::{
    create_task, delete_task, move_task, update_task, CreateTaskInput, UpdateTaskInput,
};

use sqlx::SqlitePool;

use crate::models::notification::{CreateNotification, Notification};

/// Creates a notification after a committed mutation
///
/// The primary mutation has already committed when this runs, so a failure
/// here must not propagate: it is logged and swallowed.
pub(crate) async fn notify(pool: &SqlitePool, data: CreateNotification) {
    let title = data.title.clone();
    if let Err(err) = Notification::create(pool, data).await {
        tracing::warn!(
            notification = %title,
            error = %err,
            "Failed to create notification for committed mutation"
        );
    }
}
