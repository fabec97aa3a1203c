use crate::domain::settings::ColorScheme;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    #[default]
    Static,
    Overlay,
}

/// Dashboard-wide layout configuration. The theme picker only owns
/// `color_scheme`; everything else passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub color_scheme: ColorScheme,
    pub scale: u16,
    pub menu_mode: MenuMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            scale: 14,
            menu_mode: MenuMode::Static,
        }
    }
}

/// Shared holder of the current [`LayoutConfig`].
///
/// Readers get a copy; writers replace the whole value. Nobody mutates the
/// shared config in place.
#[derive(Debug, Clone, Default)]
pub struct LayoutService {
    config: Arc<RwLock<LayoutConfig>>,
}

impl LayoutService {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set(&self, config: LayoutConfig) {
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_returns_a_copy() {
        let service = LayoutService::new(LayoutConfig::default());
        let mut copy = service.config();
        copy.color_scheme = ColorScheme::Light;
        assert_eq!(service.config().color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_set_replaces_config_for_all_handles() {
        let service = LayoutService::new(LayoutConfig::default());
        let other = service.clone();
        service.set(LayoutConfig {
            scale: 16,
            ..LayoutConfig::default()
        });
        assert_eq!(other.config().scale, 16);
    }
}
