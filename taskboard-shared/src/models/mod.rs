/// Database models
///
/// Each module pairs a row struct with its CRUD operations. Functions that
/// issue a single statement take any `SqliteExecutor`, so they compose into
/// the engine's transactions; multi-query loaders take the pool.
///
/// # Models
///
/// - `user`: user accounts
/// - `board`: boards, memberships, and the nested `BoardDetail` view
/// - `column`: workflow columns within a board
/// - `task`: tasks and the nested `TaskDetail` view
/// - `tag`: globally unique labels, many-to-many with tasks
/// - `notification`: per-user notifications

pub mod board;
pub mod column;
pub mod notification;
pub mod tag;
pub mod task;
pub mod user;
