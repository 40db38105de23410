use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Profile, ProfileId};

/// Stored profile along with its bookkeeping metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub profile: Profile,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn new(id: ProfileId, profile: Profile) -> Self {
        Self {
            id,
            profile,
            updated_at: Utc::now(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileStore: Send + Sync {
    fn load(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError>;
    fn save(&self, record: ProfileRecord) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
    #[error("profile store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile store contains invalid data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Pretty-printed JSON file holding every record keyed by profile id.
///
/// A missing file reads as an empty store. Writes rewrite the whole file while
/// holding the lock.
pub struct JsonFileProfileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, ProfileRecord>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_all(&self, records: &BTreeMap<String, ProfileRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn load(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::Unavailable("profile store lock poisoned".to_string()))?;
        let mut records = self.read_all()?;
        Ok(records.remove(&id.0))
    }

    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::Unavailable("profile store lock poisoned".to_string()))?;
        let mut records = self.read_all()?;
        records.insert(record.id.0.clone(), record);
        self.write_all(&records)?;
        tracing::debug!(path = %self.path.display(), "profile store written");
        Ok(())
    }
}
