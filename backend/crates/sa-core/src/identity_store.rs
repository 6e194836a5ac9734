use crate::{NewUser, Result as CoreErrorResult, UserId, UserRecord};

/// Storage contract for registered users.
///
/// Handlers receive the store through application state, so every test can
/// build its own isolated instance.
pub trait IdentityStore: Send + Sync {
    /// Store a new user under a freshly generated id.
    ///
    /// Fails with `DuplicateUsername` if the username is already registered.
    fn insert(&self, new_user: NewUser) -> CoreErrorResult<UserRecord>;

    /// Find a user by id, `UserNotFound` if absent.
    fn lookup_by_id(&self, id: &UserId) -> CoreErrorResult<UserRecord>;

    /// Find a user by exact username, `UserNotFound` if absent.
    fn lookup_by_username(&self, username: &str) -> CoreErrorResult<UserRecord>;

    /// Number of registered users
    fn len(&self) -> CoreErrorResult<usize>;

    fn is_empty(&self) -> CoreErrorResult<bool> {
        Ok(self.len()? == 0)
    }
}
