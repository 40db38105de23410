use metrics_exporter_prometheus::PrometheusHandle;
use skill_advisor::advisor::{
    JsonFileProfileStore, ProfileId, ProfileRecord, ProfileStore, StoreError,
};
use skill_advisor::config::StorageConfig;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Profiles kept for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    records: Arc<Mutex<BTreeMap<ProfileId, ProfileRecord>>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("profile mutex poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("profile mutex poisoned".to_string()))?;
        guard.insert(record.id.clone(), record);
        Ok(())
    }
}

/// Store picked at startup from `PROFILE_STORE_PATH`.
pub(crate) enum ProfileBackend {
    Memory(InMemoryProfileStore),
    File(JsonFileProfileStore),
}

impl ProfileBackend {
    pub(crate) fn from_config(config: &StorageConfig) -> Self {
        match &config.profile_path {
            Some(path) => Self::File(JsonFileProfileStore::new(path)),
            None => Self::Memory(InMemoryProfileStore::default()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "in-memory".to_string(),
            Self::File(store) => format!("json file {}", store.path().display()),
        }
    }
}

impl ProfileStore for ProfileBackend {
    fn load(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, StoreError> {
        match self {
            Self::Memory(store) => store.load(id),
            Self::File(store) => store.load(id),
        }
    }

    fn save(&self, record: ProfileRecord) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.save(record),
            Self::File(store) => store.save(record),
        }
    }
}
