//! Durable key-value storage for preferences and session flags.
//!
//! Values are opaque strings. Structured values are stored as JSON through
//! [`get_json`] / [`set_json`]. Single writer, last write wins.

pub mod file;
pub mod memory;
pub mod redis_store;
pub mod theme;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::config::PreferencesBackend;
use crate::errors::AppError;

pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use redis_store::RedisPreferenceStore;

/// Fixed keys shared with the page.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const CURRENT_USER: &str = "currentUser";
    pub const USER_ROLE: &str = "userRole";
    pub const PERF_REPORT: &str = "skillmatch-perf";
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

pub async fn get_json<T: DeserializeOwned>(
    store: &dyn PreferenceStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn set_json<T: Serialize + ?Sized>(
    store: &dyn PreferenceStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Opens the backend selected in the config.
pub async fn open_store(backend: &PreferencesBackend) -> anyhow::Result<Arc<dyn PreferenceStore>> {
    let store: Arc<dyn PreferenceStore> = match backend {
        PreferencesBackend::File(path) => {
            info!("Preference store: file {}", path.display());
            Arc::new(FilePreferenceStore::open(path.clone()).await?)
        }
        PreferencesBackend::Redis(url) => {
            info!("Preference store: redis");
            Arc::new(RedisPreferenceStore::connect(url).await?)
        }
        PreferencesBackend::Memory => {
            info!("Preference store: in-memory (not durable)");
            Arc::new(MemoryPreferenceStore::default())
        }
    };
    Ok(store)
}
