//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionStore, UserInfo};

use crate::session::session_store;

/// Authentication state for the application: the session restored from durable
/// storage at load, updated in place by login and logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the authentication state.
/// Wrap the app with this component; it reads the session store once at mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| {
        let user = session_store().get();
        if let Some(ref user) = user {
            tracing::debug!(user = %user.name, "restored session from storage");
        }
        AuthState { user }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that logs the current user out: clears the stored session, resets the
/// auth state, and forces a full page reload so no in-memory state survives.
#[component]
pub fn LogoutButton() -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        session_store().clear();
        auth_state.set(AuthState::default());
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    rsx! {
        button {
            class: "secondary",
            onclick: onclick,
            "Log out"
        }
    }
}
