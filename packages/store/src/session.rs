use crate::models::UserInfo;

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "helpdesk_user";

/// Persistence of the single authenticated-user record.
///
/// Implementations never fail loudly: a write that cannot complete is dropped and a
/// read of absent or malformed content is `None`. The rest of the client treats
/// `None` as "unauthenticated" rather than as an error.
pub trait SessionStore {
    /// Serialize `user` and store it under [`SESSION_KEY`], overwriting any prior
    /// record.
    fn save(&self, user: &UserInfo);

    /// Read back the stored record. `None` when nothing is stored or the stored
    /// text does not deserialize.
    fn get(&self) -> Option<UserInfo>;

    /// Remove the stored record.
    fn clear(&self);
}
