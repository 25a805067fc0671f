//! Durable client-local state: the key/value storage the portal persists
//! into, and the two stores built on top of it.

pub mod error;
pub mod file_storage;
pub mod key_value_store;
pub mod keys;
pub mod memory_storage;
pub mod preference_store;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use key_value_store::KeyValueStore;
pub use memory_storage::MemoryStorage;
pub use preference_store::PreferenceStore;
pub use session_store::SessionStore;
