//! 凭证存储 - durable persistence of the last-known session
//!
//! One JSON document holding the token and the identity. A missing or
//! unreadable document always loads as "no prior session".

use serde::{Deserialize, Serialize};
use shared::Identity;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// File name of the persisted session inside the storage directory
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted session document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub token: String,
    pub user: Identity,
    /// Unix millis of the last write
    #[serde(default)]
    pub saved_at: i64,
}

impl StoredCredential {
    pub fn new(token: impl Into<String>, user: Identity) -> Self {
        Self {
            token: token.into(),
            user,
            saved_at: shared::util::now_millis(),
        }
    }
}

/// Process-wide key-value area for the persisted session
pub trait CredentialStore: Send + Sync {
    /// Load the stored session; absence and corruption both yield `None`
    fn load(&self) -> Option<StoredCredential>;

    fn save(&self, credential: &StoredCredential) -> Result<(), StorageError>;

    /// Remove the stored session. Succeeds when nothing is stored.
    fn clear(&self) -> Result<(), StorageError>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// 创建凭证存储
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_filename(base_path, SESSION_FILE)
    }

    pub fn with_filename(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    /// 确保目录存在
    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// 检查凭证是否存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 获取路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<StoredCredential> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = ?self.path, "Failed to read stored session: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(credential) => Some(credential),
            Err(e) => {
                tracing::warn!(path = ?self.path, "Ignoring corrupt stored session: {}", e);
                None
            }
        }
    }

    fn save(&self, credential: &StoredCredential) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = ?self.path, "Session persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = ?self.path, "Stored session cleared");
        }
        Ok(())
    }
}

/// In-memory store for ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<StoredCredential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential
    pub fn with_credential(credential: StoredCredential) -> Self {
        Self {
            slot: Mutex::new(Some(credential)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<StoredCredential> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, credential: &StoredCredential) -> Result<(), StorageError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(credential.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RoleName;

    #[test]
    fn test_file_store_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested"));

        assert!(store.load().is_none());
        let user = Identity::new(1, "lestrade").with_roles([RoleName::PoliceOfficer]);
        store.save(&StoredCredential::new("tok", user.clone())).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.user, user);

        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().is_none());
        store
            .save(&StoredCredential::new("t", Identity::new(2, "hopkins")))
            .unwrap();
        assert_eq!(store.load().map(|c| c.token), Some("t".to_string()));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
