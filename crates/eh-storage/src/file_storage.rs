use crate::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use parking_lot::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Local storage persisted as a single JSON object of string entries.
///
/// Every mutation rewrites the whole file with the atomic write pattern, so
/// a crash mid-write leaves the previous contents intact.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage file, creating its directory if needed.
    ///
    /// A file that cannot be parsed is renamed to
    /// `<name>.corrupted.<timestamp>` and storage starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| StorageError::dir_creation(dir.to_path_buf(), e))?;
        }

        let entries = if path.exists() {
            let contents =
                fs::read_to_string(&path).map_err(|e| StorageError::file_read(path.clone(), e))?;

            match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => {
                    info!("Opened local storage at {path:?} ({} entries)", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Local storage corrupted at {path:?}: {e}");
                    Self::backup_corrupted(&path)?;
                    BTreeMap::new()
                }
            }
        } else {
            info!("No local storage at {path:?} (first launch)");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_corrupted(path: &Path) -> StorageResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path)
            .map_err(|e| StorageError::backup_failed(path.to_path_buf(), e))?;

        warn!("Backed up corrupted local storage to {backup_path:?}");
        Ok(backup_path)
    }

    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        Ok(())
    }

    /// Applies `change` to a copy of the entries and only commits the copy
    /// once it has been written to disk.
    fn mutate(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> StorageResult<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        change(&mut next);

        if next == *entries {
            return Ok(());
        }

        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!("Storing '{key}' ({} bytes)", value.len());
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        debug!("Removing '{key}'");
        self.mutate(|entries| {
            entries.remove(key);
        })
    }
}
