//! Client-side authentication state.
//!
//! The browser layer owns storage and network effects; this machine owns the
//! transitions, so they can be exercised without a browser.

use crate::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No token. The visitor is signed out.
    Anonymous,
    /// A token is present but the identity behind it has not resolved yet.
    PendingUser,
    /// Token and user are both known.
    Authenticated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

impl SessionState {
    /// State at startup, from whatever token survived the last page load.
    /// The user is never persisted and must be re-fetched.
    pub fn restored(token: Option<String>) -> Self {
        Self { token, user: None }
    }

    pub fn phase(&self) -> Phase {
        match (&self.token, &self.user) {
            (None, _) => Phase::Anonymous,
            (Some(_), None) => Phase::PendingUser,
            (Some(_), Some(_)) => Phase::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// A fresh token was obtained. Any previously resolved user is stale
    /// until the new token's identity comes back.
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn user_resolved(&mut self, user: User) {
        self.user = Some(user);
    }

    /// The backend rejected the token. Equivalent to an explicit logout.
    pub fn user_rejected(&mut self) {
        self.logout();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_authenticated_tracks_resolved_user() {
        let mut state = SessionState::default();
        assert_eq!(state.phase(), Phase::Anonymous);
        assert!(!state.is_authenticated());

        state.login("tok".to_string());
        assert_eq!(state.phase(), Phase::PendingUser);
        // A token alone is not an identity.
        assert!(!state.is_authenticated());

        state.user_resolved(user(7));
        assert_eq!(state.phase(), Phase::Authenticated);
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.id), Some(7));
    }

    #[test]
    fn test_login_then_logout_leaves_nothing_behind() {
        let mut state = SessionState::default();
        state.login("tok".to_string());
        state.logout();

        assert_eq!(state.phase(), Phase::Anonymous);
        assert_eq!(state.token(), None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_rejected_token_clears_everything_from_any_phase() {
        let mut pending = SessionState::restored(Some("expired".to_string()));
        assert_eq!(pending.phase(), Phase::PendingUser);
        pending.user_rejected();
        assert_eq!(pending.phase(), Phase::Anonymous);
        assert_eq!(pending.token(), None);

        let mut authed = SessionState::default();
        authed.login("tok".to_string());
        authed.user_resolved(user(1));
        authed.user_rejected();
        assert_eq!(authed.phase(), Phase::Anonymous);
        assert!(authed.user().is_none());
    }

    #[test]
    fn test_relogin_drops_stale_user() {
        let mut state = SessionState::default();
        state.login("first".to_string());
        state.user_resolved(user(1));

        state.login("second".to_string());
        assert_eq!(state.phase(), Phase::PendingUser);
        assert!(state.user().is_none());
        assert_eq!(state.token(), Some("second"));
    }

    #[test]
    fn test_restored_without_token_is_anonymous() {
        let state = SessionState::restored(None);
        assert_eq!(state.phase(), Phase::Anonymous);
    }
}
