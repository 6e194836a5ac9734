pub mod error;
pub mod identity_store;
pub mod in_memory_identity_store;
pub mod models;

pub use error::{CoreError, Result};
pub use identity_store::IdentityStore;
pub use in_memory_identity_store::InMemoryIdentityStore;
pub use models::new_user::NewUser;
pub use models::user_id::UserId;
pub use models::user_record::UserRecord;

#[cfg(test)]
mod tests;
