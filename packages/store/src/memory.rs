use std::sync::{Arc, Mutex};

use crate::models::UserInfo;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
///
/// Holds the *serialized* record rather than the typed value so the
/// malformed-content path behaves exactly like durable storage: whatever text is in
/// the slot goes through deserialization on every `get`.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw text, bypassing serialization. Lets tests inject
    /// content a buggy or older client might have left behind.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, user: &UserInfo) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        *self.slot.lock().unwrap() = Some(raw);
    }

    fn get(&self) -> Option<UserInfo> {
        let slot = self.slot.lock().unwrap();
        serde_json::from_str(slot.as_deref()?).ok()
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: 1,
            name: "Ana".to_string(),
            role: "agent".to_string(),
            email: Some("a@b.com".to_string()),
        }
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let store = MemorySessionStore::new();
        store.save(&user());
        assert_eq!(store.get(), Some(user()));
    }

    #[test]
    fn test_empty_store_reads_none() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_malformed_content_reads_none() {
        for raw in ["", "not json", "{\"id\":", "[]", "42", "{\"id\":\"x\"}"] {
            let store = MemorySessionStore::with_raw(raw);
            assert_eq!(store.get(), None, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_save_overwrites_prior_record() {
        let store = MemorySessionStore::new();
        store.save(&user());
        let other = UserInfo {
            id: 2,
            name: "Luis".to_string(),
            role: "admin".to_string(),
            email: None,
        };
        store.save(&other);
        assert_eq!(store.get(), Some(other));
    }

    #[test]
    fn test_clear_removes_record() {
        let store = MemorySessionStore::new();
        store.save(&user());
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        // A record written by a newer client still deserializes.
        let raw = "{\"id\":3,\"name\":\"Eva\",\"role\":\"agent\",\"team\":\"tier-2\"}";
        let store = MemorySessionStore::with_raw(raw);
        let user = store.get().unwrap();
        assert_eq!(user.name, "Eva");
        assert_eq!(user.email, None);
    }
}
