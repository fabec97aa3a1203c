pub mod error;
pub mod file_store;
pub mod http_store;

pub use error::StoreError;
pub use file_store::FileSettingsStore;
pub use http_store::HttpSettingsStore;

use crate::config::StoreConfig;
use crate::domain::store::SettingsStore;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builds the settings store selected in the `[store]` config section.
pub fn build_store(config: &StoreConfig) -> Result<Arc<dyn SettingsStore>> {
    match config {
        StoreConfig::File { path } => {
            let path = path
                .clone()
                .or_else(file_store::default_settings_path)
                .ok_or_else(|| anyhow!("no home directory; set store.path in the config"))?;
            Ok(Arc::new(FileSettingsStore::new(path)))
        }
        StoreConfig::Http { url, timeout_secs } => {
            let timeout = timeout_secs.map_or(http_store::DEFAULT_TIMEOUT, Duration::from_secs);
            Ok(Arc::new(HttpSettingsStore::new(url, timeout)?))
        }
    }
}
