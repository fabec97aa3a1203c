use crate::domain::settings::ColorScheme;
use ratatui::style::Color;

/// Scheme-dependent base colors. The accent comes from the style root.
pub struct Palette {
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay: Color,
    pub accent: Color,
    pub on_accent: Color,
}

pub const DARK: Palette = Palette {
    base: Color::Rgb(30, 30, 36),
    mantle: Color::Rgb(24, 24, 29),
    crust: Color::Rgb(17, 17, 21),
    text: Color::Rgb(222, 226, 230),
    subtext: Color::Rgb(160, 166, 176),
    surface0: Color::Rgb(44, 45, 54),
    surface1: Color::Rgb(62, 64, 76),
    overlay: Color::Rgb(110, 114, 128),
    accent: Color::Rgb(247, 147, 26),
    on_accent: Color::Rgb(255, 255, 255),
};

pub const LIGHT: Palette = Palette {
    base: Color::Rgb(248, 249, 250),
    mantle: Color::Rgb(238, 240, 243),
    crust: Color::Rgb(222, 226, 230),
    text: Color::Rgb(33, 37, 41),
    subtext: Color::Rgb(96, 102, 110),
    surface0: Color::Rgb(233, 236, 239),
    surface1: Color::Rgb(206, 212, 218),
    overlay: Color::Rgb(134, 142, 150),
    accent: Color::Rgb(247, 147, 26),
    on_accent: Color::Rgb(255, 255, 255),
};

#[must_use]
pub fn for_scheme(scheme: ColorScheme) -> &'static Palette {
    match scheme {
        ColorScheme::Dark => &DARK,
        ColorScheme::Light => &LIGHT,
    }
}
