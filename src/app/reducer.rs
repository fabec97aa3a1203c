use super::{
    action::{Action, UpdateResult},
    command::Command,
    features::{navigation, settings},
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let action = match action {
        Action::ActivateFocus => navigation::activation(state),
        // Redraw only.
        Action::Tick => return None,
        other => other,
    };

    if let UpdateResult::Handled(cmd) = navigation::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = settings::update(state, &action) {
        return cmd;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, Section};
    use crate::domain::settings::{ColorScheme, ThemeSettings, PRIMARY_COLOR_VAR};
    use crate::theme::THEME_OPTIONS;
    use ratatui::style::Color;

    #[test]
    fn test_select_palette_returns_save_and_restyles() {
        let mut state = AppState::default();
        let cmd = update(&mut state, Action::SelectPalette(2));

        let Some(Command::SaveSettings(saved)) = cmd else {
            panic!("Expected Command::SaveSettings");
        };
        assert_eq!(saved.accent_colors, Some(THEME_OPTIONS[2].accent_colors()));
        assert_eq!(state.palette_cursor, 2);
        assert_eq!(state.theme.accent, Color::Rgb(33, 150, 243));
        assert_eq!(
            state.widget.style_root().property(PRIMARY_COLOR_VAR).as_deref(),
            Some("#2196f3")
        );
    }

    #[test]
    fn test_out_of_range_palette_is_ignored() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::SelectPalette(99)), None);
        assert_eq!(state.widget.current_color, "");
    }

    #[test]
    fn test_activate_on_scheme_section() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Section::Scheme);

        update(&mut state, Action::CursorRight);
        let cmd = update(&mut state, Action::ActivateFocus);

        assert_eq!(
            cmd,
            Some(Command::SaveSettings(ThemeSettings::scheme_only(
                ColorScheme::Light
            )))
        );
        assert_eq!(state.widget.selected_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_activate_on_palette_section() {
        let mut state = AppState::default();
        update(&mut state, Action::FocusNext);
        update(&mut state, Action::CursorLeft);
        assert_eq!(state.palette_cursor, THEME_OPTIONS.len() - 1);

        update(&mut state, Action::ActivateFocus);
        assert_eq!(state.widget.current_color, "#b340fa");
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = AppState::default();
        update(&mut state, Action::CursorRight);
        update(&mut state, Action::CursorRight);
        assert_eq!(state.scheme_cursor, 0);
    }

    #[test]
    fn test_settings_loaded_moves_cursors() {
        let mut state = AppState::default();
        let cmd = update(
            &mut state,
            Action::SettingsLoaded(Some(ThemeSettings {
                color_scheme: Some(ColorScheme::Light),
                accent_colors: Some(THEME_OPTIONS[3].accent_colors()),
            })),
        );

        assert_eq!(cmd, None);
        assert_eq!(state.scheme_cursor, 1);
        assert_eq!(state.palette_cursor, 3);
        assert_eq!(state.theme.accent, Color::Rgb(76, 175, 80));
    }

    #[test]
    fn test_help_toggle_and_cancel() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_tick_changes_nothing() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Tick), None);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.widget.current_color, "");
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
