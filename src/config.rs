use crate::app::keymap::KeyConfig;
use crate::domain::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_ENV: &str = "ACCENT_CONFIG";

/// Where theme settings are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    File {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    Http {
        url: String,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File { path: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub store: StoreConfig,
    pub keys: KeyConfig,
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("accent");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    /// Loads the config file, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::MenuMode;
    use crate::domain::settings::ColorScheme;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_toml_str(
            r#"
            [layout]
            color_scheme = "light"
            scale = 16
            menu_mode = "overlay"

            [store]
            backend = "http"
            url = "http://192.168.1.20"
            timeout_secs = 3

            [keys]
            profile = "vim"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.color_scheme, ColorScheme::Light);
        assert_eq!(config.layout.scale, 16);
        assert_eq!(config.layout.menu_mode, MenuMode::Overlay);
        assert_eq!(
            config.store,
            StoreConfig::Http {
                url: "http://192.168.1.20".to_string(),
                timeout_secs: Some(3),
            }
        );
    }

    #[test]
    fn test_partial_layout_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[layout]\ncolor_scheme = \"light\"\n").unwrap();
        assert_eq!(config.layout.scale, LayoutConfig::default().scale);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_file_store_with_path() {
        let config =
            AppConfig::from_toml_str("[store]\nbackend = \"file\"\npath = \"/srv/theme.toml\"\n")
                .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::File {
                path: Some(PathBuf::from("/srv/theme.toml"))
            }
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(AppConfig::from_toml_str("[store]\nbackend = \"nvs\"\n").is_err());
    }
}
