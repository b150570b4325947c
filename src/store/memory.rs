//! In-memory profile store — used by tests and the demo wizard.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::profile::HealthProfile;
use crate::store::wire::{self, ProfileRecord};
use crate::store::ProfileStore;

/// Mutex-held wire record with one-shot failure injection.
///
/// Stores the encoded [`ProfileRecord`] rather than the domain type so
/// the boundary encoding is exercised the same way the persistent
/// backends exercise it.
#[derive(Default)]
pub struct MemoryProfileStore {
    record: Mutex<Option<ProfileRecord>>,
    fail_next: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a profile already stored.
    pub fn with_profile(profile: &HealthProfile) -> Self {
        Self {
            record: Mutex::new(Some(wire::encode(profile))),
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next store operation fail with the given message.
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap() = Some(message.into());
    }

    /// The raw stored record, for boundary-level assertions.
    pub fn stored_record(&self) -> Option<ProfileRecord> {
        self.record.lock().unwrap().clone()
    }

    fn take_injected_failure(&self) -> Option<StoreError> {
        self.fail_next
            .lock()
            .unwrap()
            .take()
            .map(StoreError::Connection)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load_profile(&self) -> Result<Option<HealthProfile>, StoreError> {
        if let Some(err) = self.take_injected_failure() {
            return Err(err);
        }
        Ok(self.record.lock().unwrap().as_ref().map(wire::decode))
    }

    async fn save_profile(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        if let Some(err) = self.take_injected_failure() {
            return Err(err);
        }
        *self.record.lock().unwrap() = Some(wire::encode(profile));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_reports_not_found() {
        let store = MemoryProfileStore::new();
        assert!(store.load_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = MemoryProfileStore::new();
        let profile = HealthProfile {
            first_name: "Asha".to_string(),
            allergies: vec!["Penicillin".to_string(), "Dust".to_string()],
            ..Default::default()
        };
        store.save_profile(&profile).await.unwrap();

        let loaded = store.load_profile().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(store.stored_record().unwrap().allergies, "Penicillin,Dust");
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let store = MemoryProfileStore::new();
        store.fail_next("down");
        assert!(store.load_profile().await.is_err());
        assert!(store.load_profile().await.unwrap().is_none());
    }
}
