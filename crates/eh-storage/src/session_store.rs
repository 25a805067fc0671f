use crate::keys::USER_KEY;
use crate::{KeyValueStore, StorageResult};

use eh_core::{Identity, Session};

use std::sync::Arc;

use log::{info, warn};
use parking_lot::RwLock;

/// Single source of truth for the active identity.
///
/// Replacement is total: an identity is either set as a whole or cleared.
/// Persisting and swapping the in-memory value happen under one write lock,
/// and the in-memory value only changes after the write reached storage.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    /// Open the store, restoring any identity persisted by a previous run.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let current = Self::read_persisted(storage.as_ref());
        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    /// Read the persisted identity.
    ///
    /// Missing, unreadable or malformed records (including ones claiming the
    /// GUEST role) all load as `None`.
    pub fn load(&self) -> Option<Identity> {
        Self::read_persisted(self.storage.as_ref())
    }

    fn read_persisted(storage: &dyn KeyValueStore) -> Option<Identity> {
        let raw = match storage.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read stored identity, treating as logged out: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Stored identity is malformed, treating as logged out: {e}");
                None
            }
        }
    }

    /// Replace the active identity and persist it.
    pub fn set(&self, identity: Identity) -> StorageResult<()> {
        let json = serde_json::to_string(&identity)?;

        let mut current = self.current.write();
        self.storage.set_item(USER_KEY, &json)?;

        info!("Session set for {} ({})", identity.id(), identity.role());
        *current = Some(identity);
        Ok(())
    }

    /// Remove the active identity and its persisted record.
    pub fn clear(&self) -> StorageResult<()> {
        let mut current = self.current.write();
        self.storage.remove_item(USER_KEY)?;

        if let Some(previous) = current.take() {
            info!("Session cleared for {}", previous.id());
        }
        Ok(())
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.read().clone()
    }

    pub fn session(&self) -> Session {
        Session::from(self.current())
    }
}
