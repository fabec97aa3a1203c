use crate::app::command::Command;
use crate::domain::settings::{ColorScheme, ThemeSettings};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Navigation ---
    FocusNext,     // Tab: move to the next section
    FocusPrev,     // BackTab: move to the previous section
    CursorLeft,    // Previous item in the focused section
    CursorRight,   // Next item in the focused section
    ActivateFocus, // Enter/Space: pick the item under the cursor

    // --- Selections ---
    SetScheme(ColorScheme), // Switch dark/light and persist
    SelectPalette(usize),   // Apply preset by index and persist

    // --- UI Mode Transitions ---
    ToggleHelp, // Toggle the help overlay (?)
    CancelMode, // ESC key (close overlay)

    // --- Async Results ---
    SettingsLoaded(Option<ThemeSettings>), // Initial load finished
}
