use ratatui::style::Color;

/// Parses the subset of CSS color syntax the accent bundles use.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r,g,b)` and `rgba(r,g,b,a)`; alpha is
/// dropped. Compound values such as `1px solid #F7931A` are not colors and
/// yield `None`.
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut channels = args.split(',').map(str::trim);
    let r = channels.next()?.parse::<u8>().ok()?;
    let g = channels.next()?.parse::<u8>().ok()?;
    let b = channels.next()?.parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
            let mut next = || digits.next().map(|d| (d * 17) as u8);
            Some(Color::Rgb(next()?, next()?, next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Non-Rgb `Color` variants are returned as-is.
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_hex() {
        assert_eq!(parse_css_color("#F7931A"), Some(Color::Rgb(247, 147, 26)));
        assert_eq!(parse_css_color("#2196f3"), Some(Color::Rgb(33, 150, 243)));
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(parse_css_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_css_color("#0a0"), Some(Color::Rgb(0, 170, 0)));
    }

    #[test]
    fn test_rgba_drops_alpha() {
        assert_eq!(
            parse_css_color("rgba(247,147,26,0.2)"),
            Some(Color::Rgb(247, 147, 26))
        );
        assert_eq!(
            parse_css_color(" rgb( 1, 2, 3 ) "),
            Some(Color::Rgb(1, 2, 3))
        );
    }

    #[test]
    fn test_compound_values_are_not_colors() {
        assert_eq!(parse_css_color("1px solid #F7931A"), None);
        assert_eq!(parse_css_color("0 0 0 0.2rem rgba(33,150,243,0.2)"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#ggg"), None);
        assert_eq!(parse_css_color("rgb(300,0,0)"), None);
        assert_eq!(parse_css_color(""), None);
    }

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(dim_color(Color::Red, 0.5), Color::Red);
    }
}
