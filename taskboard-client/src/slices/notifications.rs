/// Notifications slice
///
/// `unread_count` is derived locally — the count of `read == false` —
/// recomputed on fetch and adjusted incrementally on every other mutation,
/// so it stays exactly consistent with the list.

use taskboard_shared::models::notification::Notification;
use uuid::Uuid;

/// Notifications slice state
#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    /// Newest first, as served
    pub notifications: Vec<Notification>,

    /// Count of unread entries, kept in lockstep with `notifications`
    pub unread_count: usize,

    /// A request is in flight
    pub loading: bool,

    /// Last error message, verbatim from the server
    pub error: Option<String>,
}

/// Successful notification results
#[derive(Debug, Clone)]
pub enum NotificationsEvent {
    Fetched(Vec<Notification>),
    MarkedRead(Notification),
    AllMarkedRead,
    Deleted(Uuid),
}

/// Notifications slice actions
#[derive(Debug, Clone)]
pub enum NotificationsAction {
    Pending,
    Fulfilled(NotificationsEvent),
    Rejected { message: String },
}

/// Pure reducer for the notifications slice
pub fn reduce(state: &mut NotificationsState, action: NotificationsAction) {
    match action {
        NotificationsAction::Pending => {
            state.loading = true;
            state.error = None;
        }
        NotificationsAction::Rejected { message } => {
            state.loading = false;
            state.error = Some(message);
        }
        NotificationsAction::Fulfilled(event) => {
            state.loading = false;
            state.error = None;
            apply(state, event);
        }
    }
}

fn apply(state: &mut NotificationsState, event: NotificationsEvent) {
    match event {
        NotificationsEvent::Fetched(notifications) => {
            state.unread_count = notifications.iter().filter(|n| !n.read).count();
            state.notifications = notifications;
        }
        NotificationsEvent::MarkedRead(updated) => {
            if let Some(existing) = state.notifications.iter_mut().find(|n| n.id == updated.id) {
                let was_unread = !existing.read;
                let now_read = updated.read;
                *existing = updated;
                if was_unread && now_read {
                    state.unread_count -= 1;
                }
            }
        }
        NotificationsEvent::AllMarkedRead => {
            for notification in &mut state.notifications {
                notification.read = true;
            }
            state.unread_count = 0;
        }
        NotificationsEvent::Deleted(id) => {
            if let Some(removed) = state.notifications.iter().find(|n| n.id == id) {
                if !removed.read {
                    state.unread_count -= 1;
                }
            }
            state.notifications.retain(|n| n.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(read: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            title: "Task Assigned".to_string(),
            description: "You've been assigned to \"Fix bug\" in board \"Sprint\"".to_string(),
            user_id: Uuid::new_v4(),
            read,
            created_at: Utc::now(),
        }
    }

    fn seeded(unread: usize, read: usize) -> NotificationsState {
        let mut notifications = Vec::new();
        for _ in 0..unread {
            notifications.push(notification(false));
        }
        for _ in 0..read {
            notifications.push(notification(true));
        }

        let mut state = NotificationsState::default();
        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::Fetched(notifications)),
        );
        state
    }

    #[test]
    fn fetch_recomputes_the_unread_count() {
        let state = seeded(3, 2);
        assert_eq!(state.notifications.len(), 5);
        assert_eq!(state.unread_count, 3);
    }

    #[test]
    fn mark_read_decrements_exactly_once() {
        let mut state = seeded(2, 0);
        let mut updated = state.notifications[0].clone();
        updated.read = true;

        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::MarkedRead(updated.clone())),
        );
        assert_eq!(state.unread_count, 1);

        // Marking the same notification again is a no-op for the count
        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::MarkedRead(updated)),
        );
        assert_eq!(state.unread_count, 1);
    }

    #[test]
    fn mark_all_read_zeroes_the_count() {
        let mut state = seeded(3, 2);

        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::AllMarkedRead),
        );

        assert_eq!(state.unread_count, 0);
        assert!(state.notifications.iter().all(|n| n.read));
    }

    #[test]
    fn delete_adjusts_the_count_only_for_unread() {
        let mut state = seeded(1, 1);
        let unread_id = state
            .notifications
            .iter()
            .find(|n| !n.read)
            .unwrap()
            .id;
        let read_id = state.notifications.iter().find(|n| n.read).unwrap().id;

        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::Deleted(read_id)),
        );
        assert_eq!(state.unread_count, 1);
        assert_eq!(state.notifications.len(), 1);

        reduce(
            &mut state,
            NotificationsAction::Fulfilled(NotificationsEvent::Deleted(unread_id)),
        );
        assert_eq!(state.unread_count, 0);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn rejection_keeps_the_list_intact() {
        let mut state = seeded(2, 1);

        reduce(&mut state, NotificationsAction::Pending);
        reduce(
            &mut state,
            NotificationsAction::Rejected {
                message: "User ID is required".to_string(),
            },
        );

        assert_eq!(state.error.as_deref(), Some("User ID is required"));
        assert_eq!(state.notifications.len(), 3);
        assert_eq!(state.unread_count, 2);
    }
}
