use crate::StorageResult;

/// String key/value storage with the semantics of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}
