use shared::models::SessionUser;
use yewdux::Store;

/// Login state shared across the page tree. `logged_in` gates the routes:
/// the home feed requires it, the sign-in and sign-up pages require its
/// absence.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub logged_in: bool,
    pub user: Option<SessionUser>,
}

impl AppState {
    /// State for a signed-in user.
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            logged_in: true,
            user: Some(user),
        }
    }

    /// State after sign-out, or before any session exists.
    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "64f0c1".to_string(),
            name: "Test User".to_string(),
            user_name: "test_user".to_string(),
            email: "test@example.com".to_string(),
            photo: None,
        }
    }

    #[test]
    fn starts_logged_out() {
        let state = AppState::default();
        assert!(!state.logged_in);
        assert!(state.user.is_none());
    }

    #[test]
    fn signed_in_carries_the_user() {
        let state = AppState::signed_in(user());
        assert!(state.logged_in);
        assert_eq!(state.user.unwrap().user_name, "test_user");
    }

    #[test]
    fn signed_out_drops_the_user() {
        let signed_in = AppState::signed_in(user());
        assert_ne!(signed_in, AppState::signed_out());
        assert_eq!(AppState::signed_out(), AppState::default());
    }
}
