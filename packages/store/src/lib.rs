pub mod models;

mod session;
pub use session::{SessionStore, SESSION_KEY};

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalSessionStore;

pub use models::UserInfo;
