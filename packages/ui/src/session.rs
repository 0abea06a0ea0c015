//! Shared session-store constructor for all platforms.
//!
//! Returns the [`store::SessionStore`] backing the auth context:
//! - **Web** (WASM + `web` feature): localStorage via [`store::LocalSessionStore`]
//! - **Native** (tests, dev tooling): in-memory via [`store::MemorySessionStore`]

use store::SessionStore;

/// Create a platform-appropriate session store.
///
/// The web store is stateless (localStorage is looked up per operation), so
/// constructing one wherever it is needed is free.
pub fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalSessionStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemorySessionStore::new()
    }
}
