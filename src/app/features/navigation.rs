use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, Section},
};
use crate::domain::settings::ColorScheme;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        // Two sections, so forwards and backwards land on the same one.
        Action::FocusNext | Action::FocusPrev => {
            state.focus = state.focus.next();
            UpdateResult::Handled(None)
        }
        Action::CursorLeft => {
            let (cursor, len) = cursor_mut(state);
            *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
            UpdateResult::Handled(None)
        }
        Action::CursorRight => {
            let (cursor, len) = cursor_mut(state);
            *cursor = (*cursor + 1) % len;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Translates "activate whatever is under the cursor" into a concrete
/// selection action.
#[must_use]
pub fn activation(state: &AppState) -> Action {
    match state.focus {
        Section::Scheme => {
            let scheme = ColorScheme::all()
                .get(state.scheme_cursor)
                .copied()
                .unwrap_or_default();
            Action::SetScheme(scheme)
        }
        Section::Palette => Action::SelectPalette(state.palette_cursor),
    }
}

fn cursor_mut(state: &mut AppState) -> (&mut usize, usize) {
    match state.focus {
        Section::Scheme => (&mut state.scheme_cursor, ColorScheme::all().len()),
        Section::Palette => (&mut state.palette_cursor, state.widget.themes().len()),
    }
}
