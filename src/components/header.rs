use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widget = &self.app_state.widget;

        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let palette_text = match widget.current_name() {
            Some(name) => format!(" {name} "),
            None if widget.current_color.is_empty() => " default accent ".to_string(),
            None => format!(" custom {} ", widget.current_color),
        };

        let spans = vec![
            Span::styled(" ACCENT ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(item_bg)),
            Span::styled(
                format!(" {} ", widget.selected_scheme.label()),
                self.theme.header_item,
            ),
            Span::styled(palette_text, self.theme.header_item),
            Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(base_bg)),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
