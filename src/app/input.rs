use crate::app::{action::Action, state::AppMode, state::AppState, ui};
use crate::domain::settings::ColorScheme;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            app_state.keymap.get_action(key, app_state.mode)
        }
        Event::Mouse(mouse) => {
            if app_state.mode != AppMode::Normal {
                return None;
            }
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                resolve_click(app_state, area, Position::new(mouse.column, mouse.row))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Maps a click to the radio button or swatch under it.
pub fn resolve_click(app_state: &AppState, area: Rect, pos: Position) -> Option<Action> {
    let layout = ui::get_layout(area);

    if let Some(i) = ui::scheme_cells(layout.scheme)
        .iter()
        .position(|cell| cell.contains(pos))
    {
        return ColorScheme::all().get(i).copied().map(Action::SetScheme);
    }

    let count = app_state.widget.themes().len();
    ui::palette_cells(layout.palette, count)
        .iter()
        .position(|cell| cell.contains(pos))
        .map(Action::SelectPalette)
}
