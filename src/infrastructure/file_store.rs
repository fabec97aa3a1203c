use crate::domain::settings::ThemeSettings;
use crate::domain::store::SettingsStore;
use crate::infrastructure::error::StoreError;
use anyhow::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Settings kept in a TOML file on the local machine.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

pub fn default_settings_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("accent");
        path.push("theme.toml");
        path
    })
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Option<ThemeSettings>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })
    }

    async fn write(&self, settings: &ThemeSettings) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let content = toml::to_string(settings)?;
        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get_theme_settings(&self) -> Result<Option<ThemeSettings>> {
        Ok(self.read().await?)
    }

    async fn save_theme_settings(&self, settings: ThemeSettings) -> Result<()> {
        // Concurrent saves race on read-merge-write; the last rename wins.
        let mut stored = self.read().await?.unwrap_or_default();
        stored.merge(settings);
        self.write(&stored).await?;
        tracing::debug!("Theme settings written to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
