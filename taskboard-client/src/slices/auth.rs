/// Auth slice: the current user

use taskboard_shared::models::user::UserPublic;

/// Auth slice state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// The logged-in user, if any
    pub user: Option<UserPublic>,

    /// Whether a login or registration has succeeded
    pub is_authenticated: bool,

    /// A request is in flight
    pub loading: bool,

    /// Last error message, verbatim from the server
    pub error: Option<String>,
}

/// Successful auth results
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoggedIn(UserPublic),
    Registered(UserPublic),
}

/// Auth slice actions
#[derive(Debug, Clone)]
pub enum AuthAction {
    Pending,
    Fulfilled(AuthEvent),
    Rejected { message: String },
    Logout,
}

/// Pure reducer for the auth slice
pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::Pending => {
            state.loading = true;
            state.error = None;
        }
        AuthAction::Fulfilled(AuthEvent::LoggedIn(user))
        | AuthAction::Fulfilled(AuthEvent::Registered(user)) => {
            state.user = Some(user);
            state.is_authenticated = true;
            state.loading = false;
            state.error = None;
        }
        AuthAction::Rejected { message } => {
            state.loading = false;
            state.error = Some(message);
        }
        AuthAction::Logout => {
            state.user = None;
            state.is_authenticated = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn some_user() -> UserPublic {
        UserPublic {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn login_cycle_sets_and_clears_state() {
        let mut state = AuthState::default();

        reduce(&mut state, AuthAction::Pending);
        assert!(state.loading);
        assert!(state.error.is_none());

        reduce(
            &mut state,
            AuthAction::Fulfilled(AuthEvent::LoggedIn(some_user())),
        );
        assert!(!state.loading);
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().unwrap().email, "ada@example.com");

        reduce(&mut state, AuthAction::Logout);
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn rejection_surfaces_the_server_message_verbatim() {
        let mut state = AuthState::default();

        reduce(&mut state, AuthAction::Pending);
        reduce(
            &mut state,
            AuthAction::Rejected {
                message: "Invalid email or password".to_string(),
            },
        );

        assert!(!state.loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
    }
}
