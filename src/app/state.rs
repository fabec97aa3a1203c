use super::keymap::{KeyConfig, KeyMap};
use super::widget::ThemeConfigWidget;
use crate::domain::layout::LayoutService;
use crate::domain::settings::ColorScheme;
use crate::domain::style_root::StyleVariables;
use crate::theme::Theme;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal, // Picking scheme and palette
    Help,   // Showing the help overlay
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Scheme,
    Palette,
}

impl Section {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Section::Scheme => Section::Palette,
            Section::Palette => Section::Scheme,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Cursor ---
    pub focus: Section,
    pub scheme_cursor: usize,
    pub palette_cursor: usize,

    // --- Picker ---
    pub widget: ThemeConfigWidget,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(widget: ThemeConfigWidget, key_config: &KeyConfig) -> Self {
        let scheme_cursor = scheme_index(widget.selected_scheme);
        let mut state = Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Section::Scheme,
            scheme_cursor,
            palette_cursor: 0,
            widget,
            keymap: Arc::new(KeyMap::from_config(key_config)),
            theme: Theme::default(),
        };
        state.refresh_theme();
        state
    }

    /// Re-derives render styles from the active scheme and style variables.
    pub fn refresh_theme(&mut self) {
        self.theme = Theme::resolve(self.widget.selected_scheme, self.widget.style_root());
    }

    /// Moves the palette cursor onto the current preset, if there is one.
    pub fn sync_palette_cursor(&mut self) {
        if let Some(i) = self
            .widget
            .themes()
            .iter()
            .position(|t| self.widget.is_current(t))
        {
            self.palette_cursor = i;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let widget = ThemeConfigWidget::new(
            LayoutService::default(),
            Arc::new(StyleVariables::new()),
        );
        Self::new(widget, &KeyConfig::default())
    }
}

#[must_use]
pub fn scheme_index(scheme: ColorScheme) -> usize {
    ColorScheme::all()
        .iter()
        .position(|s| *s == scheme)
        .unwrap_or(0)
}
