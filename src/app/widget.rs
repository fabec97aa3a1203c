use crate::app::command::Command;
use crate::domain::layout::LayoutService;
use crate::domain::settings::{AccentColors, ColorScheme, ThemeSettings};
use crate::domain::style_root::StyleRoot;
use crate::theme::presets::{self, ThemeOption, THEME_OPTIONS};
use std::fmt;
use std::sync::Arc;

/// The color-scheme and accent picker.
///
/// Every selection is applied locally first and then handed back as a
/// [`Command`] for the runtime to persist. The widget never waits on the
/// store and never rolls back.
pub struct ThemeConfigWidget {
    pub selected_scheme: ColorScheme,
    pub current_color: String,
    themes: &'static [ThemeOption],
    style_root: Arc<dyn StyleRoot>,
    layout: LayoutService,
}

impl fmt::Debug for ThemeConfigWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfigWidget")
            .field("selected_scheme", &self.selected_scheme)
            .field("current_color", &self.current_color)
            .field("themes", &self.themes.len())
            .finish_non_exhaustive()
    }
}

impl ThemeConfigWidget {
    pub fn new(layout: LayoutService, style_root: Arc<dyn StyleRoot>) -> Self {
        Self {
            selected_scheme: layout.config().color_scheme,
            current_color: String::new(),
            themes: &THEME_OPTIONS,
            style_root,
            layout,
        }
    }

    #[must_use]
    pub fn themes(&self) -> &'static [ThemeOption] {
        self.themes
    }

    #[must_use]
    pub fn style_root(&self) -> &dyn StyleRoot {
        self.style_root.as_ref()
    }

    #[must_use]
    pub fn is_current(&self, option: &ThemeOption) -> bool {
        option.primary_color == self.current_color
    }

    /// Name of the preset matching the current color, if any.
    #[must_use]
    pub fn current_name(&self) -> Option<&'static str> {
        presets::find_by_primary(&self.current_color).map(|t| t.name)
    }

    /// Kicks off the one-time settings load.
    #[must_use]
    pub fn initialize(&self) -> Command {
        Command::LoadSettings
    }

    /// Applies a successful load. `None` means the store has nothing yet.
    pub fn settings_loaded(&mut self, settings: Option<ThemeSettings>) {
        let Some(settings) = settings else {
            tracing::debug!("No saved theme settings, keeping defaults");
            return;
        };

        if let Some(scheme) = settings.color_scheme {
            self.selected_scheme = scheme;
            // Loaded schemes also reach the layout so the rendered scheme matches the radio.
            self.sync_layout(scheme);
        }
        if let Some(colors) = &settings.accent_colors {
            self.apply_colors(colors);
            self.current_color = settings.primary_color().unwrap_or_default().to_string();
        }
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) -> Command {
        self.selected_scheme = scheme;
        self.sync_layout(scheme);
        Command::SaveSettings(ThemeSettings::scheme_only(scheme))
    }

    pub fn select_palette(&mut self, option: &ThemeOption) -> Command {
        let colors = option.accent_colors();
        self.apply_colors(&colors);
        self.current_color = option.primary_color.to_string();
        Command::SaveSettings(ThemeSettings {
            color_scheme: Some(self.selected_scheme),
            accent_colors: Some(colors),
        })
    }

    pub fn apply_colors(&self, colors: &AccentColors) {
        for (key, value) in colors {
            self.style_root.set_property(key, value);
        }
    }

    fn sync_layout(&self, scheme: ColorScheme) {
        let mut config = self.layout.config();
        config.color_scheme = scheme;
        self.layout.set(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::LayoutConfig;
    use crate::domain::settings::PRIMARY_COLOR_VAR;
    use crate::domain::style_root::StyleVariables;

    fn widget() -> (ThemeConfigWidget, StyleVariables, LayoutService) {
        let root = StyleVariables::new();
        let layout = LayoutService::new(LayoutConfig::default());
        let widget = ThemeConfigWidget::new(layout.clone(), Arc::new(root.clone()));
        (widget, root, layout)
    }

    fn saved(command: Command) -> ThemeSettings {
        match command {
            Command::SaveSettings(settings) => settings,
            other => panic!("Expected Command::SaveSettings, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_scheme_comes_from_layout() {
        let root = StyleVariables::new();
        let layout = LayoutService::new(LayoutConfig {
            color_scheme: ColorScheme::Light,
            ..LayoutConfig::default()
        });
        let widget = ThemeConfigWidget::new(layout, Arc::new(root));
        assert_eq!(widget.selected_scheme, ColorScheme::Light);
        assert_eq!(widget.current_color, "");
        assert!(matches!(widget.initialize(), Command::LoadSettings));
    }

    #[test]
    fn test_select_palette_applies_every_preset() {
        for option in &THEME_OPTIONS {
            let (mut widget, root, _) = widget();
            let settings = saved(widget.select_palette(option));

            assert_eq!(root.snapshot(), option.accent_colors(), "{}", option.name);
            assert_eq!(widget.current_color, option.primary_color);
            assert!(widget.is_current(option));
            assert_eq!(widget.current_name(), Some(option.name));
            assert_eq!(settings.accent_colors, Some(option.accent_colors()));
        }
    }

    #[test]
    fn test_select_blue_persists_scheme_and_bundle() {
        let (mut widget, root, _) = widget();
        let blue = THEME_OPTIONS.iter().find(|t| t.name == "Blue").unwrap();

        let settings = saved(widget.select_palette(blue));

        assert_eq!(root.property(PRIMARY_COLOR_VAR).as_deref(), Some("#2196f3"));
        assert_eq!(settings.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(settings.accent_colors, Some(blue.accent_colors()));
    }

    #[test]
    fn test_later_palette_overwrites_earlier() {
        let (mut widget, root, _) = widget();
        let _ = widget.select_palette(&THEME_OPTIONS[0]);
        let _ = widget.select_palette(&THEME_OPTIONS[3]);

        assert_eq!(root.snapshot(), THEME_OPTIONS[3].accent_colors());
        assert!(!widget.is_current(&THEME_OPTIONS[0]));
        assert!(widget.is_current(&THEME_OPTIONS[3]));
    }

    #[test]
    fn test_set_scheme_last_write_wins() {
        let (mut widget, _, layout) = widget();
        let first = saved(widget.set_scheme(ColorScheme::Dark));
        let second = saved(widget.set_scheme(ColorScheme::Light));

        assert_eq!(widget.selected_scheme, ColorScheme::Light);
        assert_eq!(layout.config().color_scheme, ColorScheme::Light);
        assert_eq!(first, ThemeSettings::scheme_only(ColorScheme::Dark));
        assert_eq!(second, ThemeSettings::scheme_only(ColorScheme::Light));
    }

    #[test]
    fn test_set_scheme_keeps_rest_of_layout() {
        let root = StyleVariables::new();
        let layout = LayoutService::new(LayoutConfig {
            scale: 18,
            ..LayoutConfig::default()
        });
        let mut widget = ThemeConfigWidget::new(layout.clone(), Arc::new(root));

        let _ = widget.set_scheme(ColorScheme::Light);

        let config = layout.config();
        assert_eq!(config.color_scheme, ColorScheme::Light);
        assert_eq!(config.scale, 18);
    }

    #[test]
    fn test_palette_save_carries_current_scheme() {
        let (mut widget, _, _) = widget();
        let _ = widget.set_scheme(ColorScheme::Light);
        let settings = saved(widget.select_palette(&THEME_OPTIONS[1]));
        assert_eq!(settings.color_scheme, Some(ColorScheme::Light));
    }

    #[test]
    fn test_load_with_accents_applies_them() {
        let (mut widget, root, _) = widget();
        let green = THEME_OPTIONS[3].accent_colors();

        widget.settings_loaded(Some(ThemeSettings {
            color_scheme: Some(ColorScheme::Light),
            accent_colors: Some(green.clone()),
        }));

        assert_eq!(widget.selected_scheme, ColorScheme::Light);
        assert_eq!(widget.current_color, "#4caf50");
        assert_eq!(root.snapshot(), green);
    }

    #[test]
    fn test_load_scheme_only_leaves_current_empty() {
        let (mut widget, root, layout) = widget();
        layout.set(LayoutConfig {
            color_scheme: ColorScheme::Light,
            ..LayoutConfig::default()
        });

        widget.settings_loaded(Some(ThemeSettings::scheme_only(ColorScheme::Dark)));

        assert_eq!(widget.selected_scheme, ColorScheme::Dark);
        assert_eq!(layout.config().color_scheme, ColorScheme::Dark);
        assert_eq!(widget.current_color, "");
        assert!(root.snapshot().is_empty());
    }

    #[test]
    fn test_load_without_accents_keeps_prior_current() {
        let (mut widget, _, _) = widget();
        let _ = widget.select_palette(&THEME_OPTIONS[4]);

        widget.settings_loaded(Some(ThemeSettings::default()));
        widget.settings_loaded(None);

        assert_eq!(widget.current_color, "#b340fa");
    }

    #[test]
    fn test_load_custom_accents_without_primary() {
        let (mut widget, root, _) = widget();
        widget.settings_loaded(Some(ThemeSettings {
            color_scheme: None,
            accent_colors: Some(AccentColors::from([(
                "--button-bg".to_string(),
                "#123456".to_string(),
            )])),
        }));

        assert_eq!(root.property("--button-bg").as_deref(), Some("#123456"));
        assert_eq!(widget.current_color, "");
        assert_eq!(widget.current_name(), None);
    }
}
