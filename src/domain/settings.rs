use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Style variable that carries the representative color of an accent bundle.
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";

/// Style-variable name -> color or measurement string.
pub type AccentColors = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    #[must_use]
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Dark => write!(f, "dark"),
            ColorScheme::Light => write!(f, "light"),
        }
    }
}

/// Theme settings as held by the settings store.
///
/// Both fields are optional: a save may carry only the scheme, and a missing
/// field on load means "keep the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_colors: Option<AccentColors>,
}

impl ThemeSettings {
    #[must_use]
    pub fn scheme_only(scheme: ColorScheme) -> Self {
        Self {
            color_scheme: Some(scheme),
            accent_colors: None,
        }
    }

    /// Overwrite-style merge: every field present in `update` replaces ours.
    pub fn merge(&mut self, update: ThemeSettings) {
        if let Some(scheme) = update.color_scheme {
            self.color_scheme = Some(scheme);
        }
        if let Some(colors) = update.accent_colors {
            self.accent_colors = Some(colors);
        }
    }

    /// The `--primary-color` entry of the accent bundle, if any.
    #[must_use]
    pub fn primary_color(&self) -> Option<&str> {
        self.accent_colors
            .as_ref()
            .and_then(|colors| colors.get(PRIMARY_COLOR_VAR))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_only_omits_accents_on_the_wire() {
        let json = serde_json::to_string(&ThemeSettings::scheme_only(ColorScheme::Light)).unwrap();
        assert_eq!(json, r#"{"colorScheme":"light"}"#);
    }

    #[test]
    fn test_parse_device_payload() {
        let settings: ThemeSettings = serde_json::from_str(
            r##"{"colorScheme":"dark","accentColors":{"--primary-color":"#2196f3"}}"##,
        )
        .unwrap();
        assert_eq!(settings.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(settings.primary_color(), Some("#2196f3"));
    }

    #[test]
    fn test_parse_empty_object() {
        let settings: ThemeSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ThemeSettings::default());
        assert_eq!(settings.primary_color(), None);
    }

    #[test]
    fn test_merge_keeps_fields_missing_from_update() {
        let mut stored = ThemeSettings {
            color_scheme: Some(ColorScheme::Dark),
            accent_colors: Some(AccentColors::from([(
                PRIMARY_COLOR_VAR.to_string(),
                "#4caf50".to_string(),
            )])),
        };

        stored.merge(ThemeSettings::scheme_only(ColorScheme::Light));

        assert_eq!(stored.color_scheme, Some(ColorScheme::Light));
        assert_eq!(stored.primary_color(), Some("#4caf50"));
    }

    #[test]
    fn test_merge_replaces_whole_accent_bundle() {
        let mut stored = ThemeSettings {
            color_scheme: None,
            accent_colors: Some(AccentColors::from([
                (PRIMARY_COLOR_VAR.to_string(), "#4caf50".to_string()),
                ("--button-bg".to_string(), "#4caf50".to_string()),
            ])),
        };

        stored.merge(ThemeSettings {
            color_scheme: None,
            accent_colors: Some(AccentColors::from([(
                PRIMARY_COLOR_VAR.to_string(),
                "#b340fa".to_string(),
            )])),
        });

        let colors = stored.accent_colors.unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[PRIMARY_COLOR_VAR], "#b340fa");
    }
}
