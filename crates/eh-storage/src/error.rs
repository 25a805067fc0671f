use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while reading or writing local storage.
///
/// Corrupt persisted *content* is never reported through this type; the
/// stores treat it as absence. These errors cover the storage medium itself.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read storage file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write storage file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize storage entry: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to back up corrupted storage file {path}: {source} {location}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the portal data directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read saved portal data. \
                   The file may be locked by another process."
            }
            Self::AtomicRename { .. } => {
                "Unable to save portal data safely. \
                   Check disk space and try again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing data for storage. \
                   Please report this issue."
            }
            Self::BackupFailed { .. } => {
                "Unable to set aside corrupted portal data. \
                   Check file permissions in the data directory."
            }
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backup_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::BackupFailed {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
