use std::rc::Rc;

use dominator::clone;
use futures_signals::signal::{Mutable, Signal};
use miru_types::model::{RegisterForm, User};
use miru_types::session::{Phase, SessionState};
use wasm_bindgen::UnwrapThrowExt;

use crate::query::{self, ApiError};
use crate::utils::{AsyncLoader, local_storage};

const TOKEN_STORAGE_KEY: &str = "token";

/// Single source of truth for "who is signed in". One instance is created at
/// startup and handed to every component that needs it; nothing else writes
/// the token or the resolved user.
pub struct Session {
    state: Mutable<SessionState>,
    loader: AsyncLoader,
}

impl Session {
    /// Rebuild the session from local storage. A surviving token starts the
    /// identity fetch immediately; the user itself is never persisted.
    pub fn restore() -> Rc<Self> {
        let token = local_storage().get(TOKEN_STORAGE_KEY).unwrap_throw();

        let session = Rc::new(Self {
            state: Mutable::new(SessionState::restored(token)),
            loader: AsyncLoader::new(),
        });

        if session.phase() == Phase::PendingUser {
            Self::fetch_user(session.clone());
        }

        session
    }

    /// Store a freshly issued token and resolve the identity behind it.
    pub fn login(session: Rc<Self>, token: String) {
        local_storage().set(TOKEN_STORAGE_KEY, &token).unwrap_throw();
        session.state.lock_mut().login(token);
        Self::fetch_user(session);
    }

    /// Drop the token and the user. Purely local; always succeeds.
    pub fn logout(&self) {
        local_storage().delete(TOKEN_STORAGE_KEY).unwrap_throw();
        self.state.lock_mut().logout();
    }

    /// Create an account. Does not sign the caller in; the backend's detail
    /// message travels up through the error for the signup page to show.
    pub async fn register(&self, form: RegisterForm) -> Result<User, ApiError> {
        query::register(&form).await
    }

    /// Resolve the current token into a user. A failure of any kind means
    /// the token is no good, so the session heals itself by logging out
    /// rather than surfacing an error.
    pub fn fetch_user(session: Rc<Self>) {
        session.loader.load(clone!(session => async move {
            match query::fetch_me().await {
                Ok(user) => {
                    session.state.lock_mut().user_resolved(user);
                }
                Err(err) => {
                    warn!("session token rejected: {}", err);
                    session.logout();
                }
            }
        }));
    }

    pub fn phase(&self) -> Phase {
        self.state.lock_ref().phase()
    }

    pub fn user(&self) -> Option<User> {
        self.state.lock_ref().user().cloned()
    }

    pub fn phase_signal(&self) -> impl Signal<Item = Phase> + use<> {
        self.state.signal_ref(|state| state.phase())
    }

    pub fn is_authenticated_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(|state| state.is_authenticated())
    }

    pub fn user_signal(&self) -> impl Signal<Item = Option<User>> + use<> {
        self.state.signal_ref(|state| state.user().cloned())
    }
}
