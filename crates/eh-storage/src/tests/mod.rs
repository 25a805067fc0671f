mod file_storage;

use crate::{KeyValueStore, MemoryStorage, StorageError, StorageResult};

use std::sync::atomic::{AtomicBool, Ordering};

/// Memory storage whose writes can be switched to fail
#[derive(Default)]
pub(crate) struct FlakyStorage {
    inner: MemoryStorage,
    fail_writes: AtomicBool,
}

impl FlakyStorage {
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::file_write(
                "/flaky".into(),
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.remove_item(key)
    }
}
