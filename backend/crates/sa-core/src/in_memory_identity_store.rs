use crate::{
    CoreError, IdentityStore, NewUser, Result as CoreErrorResult, UserId, UserRecord,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;

/// Process-lifetime identity store backed by a locked `HashMap`.
///
/// Username lookups scan every record; there is no secondary index.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    users: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn read(&self) -> CoreErrorResult<RwLockReadGuard<'_, HashMap<UserId, UserRecord>>> {
        self.users.read().map_err(|_| CoreError::StoreUnavailable {
            message: "identity store lock poisoned".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write(&self) -> CoreErrorResult<RwLockWriteGuard<'_, HashMap<UserId, UserRecord>>> {
        self.users.write().map_err(|_| CoreError::StoreUnavailable {
            message: "identity store lock poisoned".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn insert(&self, new_user: NewUser) -> CoreErrorResult<UserRecord> {
        let mut users = self.write()?;

        // Check and insert under the same write guard so two concurrent
        // registrations cannot both claim a username.
        if users.values().any(|u| u.username == new_user.username) {
            return Err(CoreError::DuplicateUsername {
                username: new_user.username,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let record = UserRecord::from_new_user(new_user);
        users.insert(record.id, record.clone());

        Ok(record)
    }

    fn lookup_by_id(&self, id: &UserId) -> CoreErrorResult<UserRecord> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::UserNotFound {
                user: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn lookup_by_username(&self, username: &str) -> CoreErrorResult<UserRecord> {
        self.read()?
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| CoreError::UserNotFound {
                user: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn len(&self) -> CoreErrorResult<usize> {
        Ok(self.read()?.len())
    }
}
