use crate::domain::settings::AccentColors;

/// A named accent bundle offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub name: &'static str,
    pub primary_color: &'static str,
    hover_color: &'static str,
    focus_ring: &'static str,
}

pub const THEME_OPTIONS: [ThemeOption; 5] = [
    ThemeOption {
        name: "Orange",
        primary_color: "#F7931A",
        hover_color: "#e58617",
        focus_ring: "0 0 0 0.2rem rgba(247,147,26,0.2)",
    },
    ThemeOption {
        name: "Red",
        primary_color: "#F80421",
        hover_color: "#e63c2e",
        focus_ring: "0 0 0 0.2rem rgba(255,64,50,0.2)",
    },
    ThemeOption {
        name: "Blue",
        primary_color: "#2196f3",
        hover_color: "#1e88e5",
        focus_ring: "0 0 0 0.2rem rgba(33,150,243,0.2)",
    },
    ThemeOption {
        name: "Green",
        primary_color: "#4caf50",
        hover_color: "#43a047",
        focus_ring: "0 0 0 0.2rem rgba(76,175,80,0.2)",
    },
    ThemeOption {
        name: "Purple",
        primary_color: "#b340fa",
        hover_color: "#8e24aa",
        focus_ring: "0 0 0 0.2rem rgba(156,39,176,0.2)",
    },
];

const TEXT_ON_ACCENT: &str = "#ffffff";
const TRACK_BG: &str = "#dee2e6";

impl ThemeOption {
    /// Every style variable this bundle sets, keyed by variable name.
    #[must_use]
    pub fn accent_colors(&self) -> AccentColors {
        let primary = self.primary_color;
        let hover = self.hover_color;

        [
            ("--primary-color", primary.to_string()),
            ("--primary-color-text", TEXT_ON_ACCENT.to_string()),
            ("--highlight-bg", primary.to_string()),
            ("--highlight-text-color", TEXT_ON_ACCENT.to_string()),
            ("--focus-ring", self.focus_ring.to_string()),
            // slider
            ("--slider-bg", TRACK_BG.to_string()),
            ("--slider-range-bg", primary.to_string()),
            ("--slider-handle-bg", primary.to_string()),
            // progress bar
            ("--progressbar-bg", TRACK_BG.to_string()),
            ("--progressbar-value-bg", primary.to_string()),
            // checkbox
            ("--checkbox-border", primary.to_string()),
            ("--checkbox-bg", primary.to_string()),
            ("--checkbox-hover-bg", hover.to_string()),
            // button
            ("--button-bg", primary.to_string()),
            ("--button-hover-bg", hover.to_string()),
            (
                "--button-focus-shadow",
                format!("0 0 0 2px {TEXT_ON_ACCENT}, 0 0 0 4px {primary}"),
            ),
            // toggle button
            ("--togglebutton-bg", primary.to_string()),
            ("--togglebutton-border", format!("1px solid {primary}")),
            ("--togglebutton-hover-bg", hover.to_string()),
            ("--togglebutton-hover-border", format!("1px solid {hover}")),
            ("--togglebutton-text-color", TEXT_ON_ACCENT.to_string()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }
}

/// Finds the preset whose primary color equals `color`.
#[must_use]
pub fn find_by_primary(color: &str) -> Option<&'static ThemeOption> {
    THEME_OPTIONS.iter().find(|t| t.primary_color == color)
}
