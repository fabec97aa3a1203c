use crate::domain::settings::{ColorScheme, PRIMARY_COLOR_VAR};
use crate::domain::style_root::StyleRoot;
use ratatui::style::{Color, Modifier, Style};

pub mod color;
pub mod palette;
pub mod presets;

pub use color::{dim_color, parse_css_color};
pub use palette::Palette;
pub use presets::{ThemeOption, THEME_OPTIONS};

const PRIMARY_TEXT_VAR: &str = "--primary-color-text";
const HIGHLIGHT_BG_VAR: &str = "--highlight-bg";
const HIGHLIGHT_TEXT_VAR: &str = "--highlight-text-color";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,

    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_item: Style,
    pub header_active: Style,

    pub section_title: Style,
    pub radio_on: Style,
    pub radio_off: Style,
    pub cursor: Style,
    pub highlight: Style,

    pub swatch_label: Style,
    pub swatch_label_current: Style,

    pub var_key: Style,
    pub var_value: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    /// Resolves the render styles for `scheme` using whatever accent
    /// variables are currently set on `root`. Missing or unparsable values
    /// fall back to the scheme's base palette.
    #[must_use]
    pub fn resolve(scheme: ColorScheme, root: &dyn StyleRoot) -> Self {
        let p = palette::for_scheme(scheme);
        let var = |key: &str, fallback: Color| {
            root.property(key)
                .as_deref()
                .and_then(parse_css_color)
                .unwrap_or(fallback)
        };

        let accent = var(PRIMARY_COLOR_VAR, p.accent);
        let on_accent = var(PRIMARY_TEXT_VAR, p.on_accent);
        let highlight_bg = var(HIGHLIGHT_BG_VAR, accent);
        let highlight_fg = var(HIGHLIGHT_TEXT_VAR, on_accent);

        Self::from_parts(p, accent, on_accent, highlight_bg, highlight_fg)
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self::from_parts(p, p.accent, p.on_accent, p.accent, p.on_accent)
    }

    fn from_parts(
        p: &Palette,
        accent: Color,
        on_accent: Color,
        highlight_bg: Color,
        highlight_fg: Color,
    ) -> Self {
        Self {
            accent,

            border: Style::default().fg(p.surface1),
            border_focus: Style::default().fg(accent),

            header_logo: Style::default()
                .bg(accent)
                .fg(on_accent)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.crust).fg(p.text),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(highlight_bg)
                .fg(highlight_fg)
                .add_modifier(Modifier::BOLD),

            section_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            radio_on: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            radio_off: Style::default().fg(p.overlay),
            cursor: Style::default()
                .bg(dim_color(accent, 0.35))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default()
                .bg(highlight_bg)
                .fg(highlight_fg)
                .add_modifier(Modifier::BOLD),

            swatch_label: Style::default().fg(p.subtext),
            swatch_label_current: Style::default().fg(accent).add_modifier(Modifier::BOLD),

            var_key: Style::default().fg(p.subtext),
            var_value: Style::default().fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.mantle).fg(p.text),
            footer: Style::default().bg(p.mantle).fg(p.subtext),

            list_item: Style::default().fg(p.text).bg(p.base),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&palette::DARK)
    }
}
