//! # localStorage session store — browser-side persistence
//!
//! [`LocalSessionStore`] is the [`SessionStore`] implementation used on the web
//! platform. It keeps the serialized session record under the single localStorage
//! key [`SESSION_KEY`].
//!
//! The struct is zero-size and `Clone`-friendly: `window.localStorage` is looked up
//! on every operation, so there is no handle to carry around.
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A full or unavailable localStorage degrades to "not
//! authenticated" rather than crashing; the server remains the authority on who the
//! user is.

use crate::models::UserInfo;
use crate::session::{SessionStore, SESSION_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalSessionStore {
    fn save(&self, user: &UserInfo) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }

    fn get(&self) -> Option<UserInfo> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(SESSION_KEY);
    }
}
