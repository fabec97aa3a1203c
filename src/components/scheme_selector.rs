use crate::app::state::{AppState, Section};
use crate::app::ui::scheme_cells;
use crate::domain::settings::ColorScheme;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Dark/light radio buttons.
pub struct SchemeSelector<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for SchemeSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.app_state.focus == Section::Scheme;
        let block = Block::default()
            .title(Span::styled(" Color Scheme ", self.theme.section_title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        block.render(area, buf);

        let selected = self.app_state.widget.selected_scheme;
        for (i, (scheme, cell)) in ColorScheme::all()
            .iter()
            .zip(scheme_cells(area))
            .enumerate()
        {
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            let on = *scheme == selected;
            let (dot, dot_style) = if on {
                ("(\u{25cf})", self.theme.radio_on)
            } else {
                ("( )", self.theme.radio_off)
            };
            let label_style = if focused && i == self.app_state.scheme_cursor {
                self.theme.cursor
            } else {
                self.theme.list_item
            };

            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(dot, dot_style),
                Span::raw(" "),
                Span::styled(format!(" {} ", scheme.label()), label_style),
            ]);
            buf.set_line(cell.x, cell.y, &line, cell.width);
        }
    }
}
