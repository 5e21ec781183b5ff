/// The client state store
///
/// [`Store`] owns the three slices and exposes one driver method per user
/// action. A driver dispatches `Pending`, performs the HTTP call, and then
/// dispatches the fulfilled result or the rejection — the reducer does the
/// rest. Nothing here is a singleton: the composition root constructs the
/// store and passes it (and the [`ApiClient`]) by reference.
///
/// # Example
///
/// ```no_run
/// use taskboard_client::{ApiClient, Store};
///
/// # async fn example() {
/// let api = ApiClient::new("http://localhost:8080");
/// let mut store = Store::new();
///
/// store.login(&api, "ada@example.com", "longenough1").await;
/// let user_id = store.auth.user.as_ref().map(|u| u.id);
/// if let Some(user_id) = user_id {
///     store.fetch_boards(&api, user_id).await;
/// }
/// # }
/// ```

use uuid::Uuid;

use crate::api::{ApiClient, NewTask, RegisterInput, TaskChanges};
use crate::slices::auth::{self, AuthAction, AuthEvent, AuthState};
use crate::slices::boards::{self, BoardsAction, BoardsEvent, BoardsState};
use crate::slices::notifications::{
    self, NotificationsAction, NotificationsEvent, NotificationsState,
};

/// Application state container
#[derive(Debug, Default)]
pub struct Store {
    pub auth: AuthState,
    pub boards: BoardsState,
    pub notifications: NotificationsState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // Synchronous actions

    pub fn select_board(&mut self, board_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::BoardSelected(board_id));
    }

    pub fn clear_board_selection(&mut self) {
        boards::reduce(&mut self.boards, BoardsAction::SelectionCleared);
    }

    pub fn logout(&mut self) {
        auth::reduce(&mut self.auth, AuthAction::Logout);
    }

    // Auth

    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) {
        auth::reduce(&mut self.auth, AuthAction::Pending);
        let action = match api.login(email, password).await {
            Ok(user) => AuthAction::Fulfilled(AuthEvent::LoggedIn(user)),
            Err(err) => AuthAction::Rejected {
                message: err.message,
            },
        };
        auth::reduce(&mut self.auth, action);
    }

    pub async fn register(&mut self, api: &ApiClient, input: RegisterInput) {
        auth::reduce(&mut self.auth, AuthAction::Pending);
        let action = match api.register(input).await {
            Ok(user) => AuthAction::Fulfilled(AuthEvent::Registered(user)),
            Err(err) => AuthAction::Rejected {
                message: err.message,
            },
        };
        auth::reduce(&mut self.auth, action);
    }

    // Boards

    pub async fn fetch_boards(&mut self, api: &ApiClient, user_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.fetch_boards(user_id).await {
            Ok(list) => BoardsAction::Fulfilled(BoardsEvent::BoardsFetched(list)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn fetch_board(&mut self, api: &ApiClient, board_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.fetch_board(board_id).await {
            Ok(board) => BoardsAction::Fulfilled(BoardsEvent::BoardFetched(board)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn create_board(
        &mut self,
        api: &ApiClient,
        title: &str,
        description: &str,
        user_id: Uuid,
    ) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.create_board(title, description, user_id).await {
            Ok(board) => BoardsAction::Fulfilled(BoardsEvent::BoardCreated(board)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn update_board(
        &mut self,
        api: &ApiClient,
        board_id: Uuid,
        title: &str,
        description: &str,
    ) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.update_board(board_id, title, description).await {
            Ok(board) => BoardsAction::Fulfilled(BoardsEvent::BoardUpdated(board)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn delete_board(&mut self, api: &ApiClient, board_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.delete_board(board_id).await {
            Ok(()) => BoardsAction::Fulfilled(BoardsEvent::BoardDeleted(board_id)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn invite_member(&mut self, api: &ApiClient, board_id: Uuid, email: &str, role: &str) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.invite_member(board_id, email, role).await {
            Ok(board) => BoardsAction::Fulfilled(BoardsEvent::MemberInvited(board)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn remove_member(&mut self, api: &ApiClient, board_id: Uuid, user_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.remove_member(board_id, user_id).await {
            Ok(board) => BoardsAction::Fulfilled(BoardsEvent::MemberRemoved(board)),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    // Columns

    pub async fn add_column(&mut self, api: &ApiClient, board_id: Uuid, title: &str) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.add_column(title, board_id).await {
            Ok(column) => BoardsAction::Fulfilled(BoardsEvent::ColumnAdded { board_id, column }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn rename_column(
        &mut self,
        api: &ApiClient,
        board_id: Uuid,
        column_id: Uuid,
        title: &str,
    ) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.rename_column(column_id, title).await {
            Ok(column) => BoardsAction::Fulfilled(BoardsEvent::ColumnRenamed { board_id, column }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn delete_column(&mut self, api: &ApiClient, board_id: Uuid, column_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.delete_column(column_id).await {
            Ok(()) => BoardsAction::Fulfilled(BoardsEvent::ColumnDeleted {
                board_id,
                column_id,
            }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    // Tasks

    pub async fn add_task(&mut self, api: &ApiClient, board_id: Uuid, task: NewTask) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.create_task(task).await {
            Ok(task) => BoardsAction::Fulfilled(BoardsEvent::TaskAdded { board_id, task }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn update_task(
        &mut self,
        api: &ApiClient,
        board_id: Uuid,
        task_id: Uuid,
        changes: TaskChanges,
    ) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.update_task(task_id, changes).await {
            Ok(task) => BoardsAction::Fulfilled(BoardsEvent::TaskUpdated { board_id, task }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn move_task(
        &mut self,
        api: &ApiClient,
        board_id: Uuid,
        task_id: Uuid,
        destination_column_id: Uuid,
    ) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.move_task(task_id, destination_column_id).await {
            Ok(task) => BoardsAction::Fulfilled(BoardsEvent::TaskMoved { board_id, task }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    pub async fn delete_task(&mut self, api: &ApiClient, board_id: Uuid, task_id: Uuid) {
        boards::reduce(&mut self.boards, BoardsAction::Pending);
        let action = match api.delete_task(task_id).await {
            Ok(()) => BoardsAction::Fulfilled(BoardsEvent::TaskDeleted { board_id, task_id }),
            Err(err) => BoardsAction::Rejected {
                message: err.message,
            },
        };
        boards::reduce(&mut self.boards, action);
    }

    // Notifications

    pub async fn fetch_notifications(&mut self, api: &ApiClient, user_id: Uuid) {
        notifications::reduce(&mut self.notifications, NotificationsAction::Pending);
        let action = match api.fetch_notifications(user_id).await {
            Ok(list) => NotificationsAction::Fulfilled(NotificationsEvent::Fetched(list)),
            Err(err) => NotificationsAction::Rejected {
                message: err.message,
            },
        };
        notifications::reduce(&mut self.notifications, action);
    }

    pub async fn mark_notification_read(&mut self, api: &ApiClient, notification_id: Uuid) {
        notifications::reduce(&mut self.notifications, NotificationsAction::Pending);
        let action = match api.mark_notification_read(notification_id).await {
            Ok(notification) => {
                NotificationsAction::Fulfilled(NotificationsEvent::MarkedRead(notification))
            }
            Err(err) => NotificationsAction::Rejected {
                message: err.message,
            },
        };
        notifications::reduce(&mut self.notifications, action);
    }

    pub async fn mark_all_notifications_read(&mut self, api: &ApiClient, user_id: Uuid) {
        notifications::reduce(&mut self.notifications, NotificationsAction::Pending);
        let action = match api.mark_all_notifications_read(user_id).await {
            Ok(()) => NotificationsAction::Fulfilled(NotificationsEvent::AllMarkedRead),
            Err(err) => NotificationsAction::Rejected {
                message: err.message,
            },
        };
        notifications::reduce(&mut self.notifications, action);
    }

    pub async fn delete_notification(&mut self, api: &ApiClient, notification_id: Uuid) {
        notifications::reduce(&mut self.notifications, NotificationsAction::Pending);
        let action = match api.delete_notification(notification_id).await {
            Ok(()) => NotificationsAction::Fulfilled(NotificationsEvent::Deleted(notification_id)),
            Err(err) => NotificationsAction::Rejected {
                message: err.message,
            },
        };
        notifications::reduce(&mut self.notifications, action);
    }
}
