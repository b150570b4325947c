//! libSQL profile store — local persistence for the health profile.
//!
//! Stores one wire record per user as a JSON blob in the `profiles`
//! table. Supports local file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::profile::HealthProfile;
use crate::store::migrations;
use crate::store::wire::{self, ProfileRecord};
use crate::store::ProfileStore;

/// libSQL-backed profile store.
///
/// Holds a single connection reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async
/// use.
pub struct LibSqlProfileStore {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
    user_id: String,
}

impl LibSqlProfileStore {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path, user_id: &str) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Connection(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Connection(format!("Failed to create connection: {e}")))?;

        migrations::run_migrations(&conn).await?;
        info!(path = %path.display(), "Profile database opened");

        Ok(Self {
            db: Arc::new(db),
            conn,
            user_id: user_id.to_string(),
        })
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory(user_id: &str) -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                StoreError::Connection(format!("Failed to create in-memory database: {e}"))
            })?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Connection(format!("Failed to create connection: {e}")))?;

        migrations::run_migrations(&conn).await?;

        Ok(Self {
            db: Arc::new(db),
            conn,
            user_id: user_id.to_string(),
        })
    }
}

#[async_trait]
impl ProfileStore for LibSqlProfileStore {
    async fn load_profile(&self) -> Result<Option<HealthProfile>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT record FROM profiles WHERE user_id = ?1",
                params![self.user_id.clone()],
            )
            .await
            .map_err(|e| StoreError::Query(format!("load_profile: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let record_str: String = row
                    .get(0)
                    .map_err(|e| StoreError::Query(format!("load_profile row parse: {e}")))?;
                let record: ProfileRecord = serde_json::from_str(&record_str)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(wire::decode(&record)))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Query(format!("load_profile: {e}"))),
        }
    }

    async fn save_profile(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        let record = wire::encode(profile);
        let record_str =
            serde_json::to_string(&record).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        self.conn
            .execute(
                "INSERT INTO profiles (user_id, record, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (user_id) DO UPDATE SET record = ?2, updated_at = ?3",
                params![self.user_id.clone(), record_str, now],
            )
            .await
            .map_err(|e| StoreError::Query(format!("save_profile: {e}")))?;

        debug!(user_id = %self.user_id, "Profile saved to DB");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BloodGroup, Gender};

    #[tokio::test]
    async fn fresh_database_has_no_profile() {
        let store = LibSqlProfileStore::new_memory("default").await.unwrap();
        assert!(store.load_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = LibSqlProfileStore::new_memory("default").await.unwrap();
        let profile = HealthProfile {
            first_name: "Asha".to_string(),
            gender: Gender::Female,
            blood_group: BloodGroup::OPositive,
            height_cm: 162.0,
            allergies: vec!["Penicillin".to_string(), "Dust".to_string()],
            ..Default::default()
        };

        store.save_profile(&profile).await.unwrap();
        let loaded = store.load_profile().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn save_replaces_existing_profile() {
        let store = LibSqlProfileStore::new_memory("default").await.unwrap();
        store
            .save_profile(&HealthProfile {
                first_name: "Asha".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        store
            .save_profile(&HealthProfile {
                first_name: "Ravi".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let loaded = store.load_profile().await.unwrap().unwrap();
        assert_eq!(loaded.first_name, "Ravi");
    }

    #[tokio::test]
    async fn profiles_are_keyed_by_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.db");
        let alice = LibSqlProfileStore::new_local(&path, "alice").await.unwrap();
        let bob = LibSqlProfileStore::new_local(&path, "bob").await.unwrap();

        alice
            .save_profile(&HealthProfile {
                first_name: "Alice".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(bob.load_profile().await.unwrap().is_none());
        assert_eq!(
            alice.load_profile().await.unwrap().unwrap().first_name,
            "Alice"
        );
    }
}
