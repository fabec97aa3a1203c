use crate::app::state::{AppState, Section};
use crate::app::ui::palette_cells;
use crate::theme::{parse_css_color, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const CHECK: &str = "\u{2714}";

/// One color swatch per preset, with a check mark on the current one.
pub struct PaletteGrid<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for PaletteGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.app_state.focus == Section::Palette;
        let block = Block::default()
            .title(Span::styled(" Theme Colors ", self.theme.section_title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        block.render(area, buf);

        let widget = &self.app_state.widget;
        let themes = widget.themes();

        for (i, (option, cell)) in themes
            .iter()
            .zip(palette_cells(area, themes.len()))
            .enumerate()
        {
            if cell.width == 0 || cell.height == 0 {
                continue;
            }

            let swatch_color = parse_css_color(option.primary_color).unwrap_or(self.theme.accent);
            let is_current = widget.is_current(option);
            let mark = if is_current { CHECK } else { " " };
            let swatch = Span::styled(
                format!("  {mark}  "),
                Style::default()
                    .bg(swatch_color)
                    .fg(ratatui::style::Color::White)
                    .add_modifier(Modifier::BOLD),
            );

            let label_style = if focused && i == self.app_state.palette_cursor {
                self.theme.cursor
            } else if is_current {
                self.theme.swatch_label_current
            } else {
                self.theme.swatch_label
            };

            let mut lines = vec![
                Line::from(swatch),
                Line::from(Span::styled(option.name, label_style)),
            ];
            if cell.height > 2 {
                lines.insert(
                    0,
                    Line::from(Span::styled(format!("{}", i + 1), self.theme.dimmed)),
                );
            }

            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }
}
