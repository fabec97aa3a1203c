use crate::domain::settings::ThemeSettings;
use crate::domain::store::SettingsStore;
use crate::infrastructure::error::StoreError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const THEME_ENDPOINT: &str = "/api/theme";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings kept on the device itself, behind its REST theme endpoint.
#[derive(Debug, Clone)]
pub struct HttpSettingsStore {
    client: reqwest::Client,
    url: String,
}

impl HttpSettingsStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StoreError::from)?;
        Ok(Self {
            client,
            url: theme_url(base_url),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn check(&self, status: StatusCode) -> Result<(), StoreError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            })
        }
    }
}

fn theme_url(base_url: &str) -> String {
    format!("{}{THEME_ENDPOINT}", base_url.trim_end_matches('/'))
}

#[async_trait]
impl SettingsStore for HttpSettingsStore {
    async fn get_theme_settings(&self) -> Result<Option<ThemeSettings>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(StoreError::from)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.check(response.status())?;

        let settings = response
            .json::<Option<ThemeSettings>>()
            .await
            .map_err(StoreError::from)?;
        Ok(settings)
    }

    async fn save_theme_settings(&self, settings: ThemeSettings) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&settings)
            .send()
            .await
            .map_err(StoreError::from)?;
        self.check(response.status())?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("device {}", self.url)
    }
}
