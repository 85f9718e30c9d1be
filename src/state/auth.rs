#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Set, Update};

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Provided via context as an `RwSignal` so pages and the navigation guard
/// share one session view. The guard only ever reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while the startup session probe is in flight.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Probe `/api/auth/me` once at startup and populate the session signal.
pub fn load_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState { user: None, loading: true });
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState { user, loading: false });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.set(AuthState::default());
    }
}

/// Log out on the server and clear the local session.
pub fn logout(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.update(|state| state.user = None);
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|state| state.user = None);
}
