use crate::domain::settings::ThemeSettings;
use anyhow::Result;
use async_trait::async_trait;

/// Durable home of the theme settings (a local file or the device itself).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    // `None` when nothing has been saved yet
    async fn get_theme_settings(&self) -> Result<Option<ThemeSettings>>;

    // Overwrite-style merge of the fields present in `settings`
    async fn save_theme_settings(&self, settings: ThemeSettings) -> Result<()>;

    fn describe(&self) -> String;
}
