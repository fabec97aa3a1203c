use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" Tab / j / \u{2193}", "Next section"),
            (" BackTab / k / \u{2191}", "Previous section"),
            (" h / \u{2190}", "Previous item"),
            (" l / \u{2192}", "Next item"),
            (" Enter / Space", "Apply item under cursor"),
        ],
    ),
    (
        "Theme",
        &[
            (" D", "Dark color scheme"),
            (" L", "Light color scheme"),
            (" 1-5", "Apply accent palette"),
            (" Click", "Apply radio button or swatch"),
        ],
    ),
    (
        "General",
        &[(" ?", "Toggle this help"), (" Esc", "Close help"), (" q", "Quit")],
    ),
];

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 70, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.list_item);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (category, entries) in BINDINGS {
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (keys, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*keys, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        }

        Table::new(rows, [Constraint::Length(24), Constraint::Min(10)])
            .block(block)
            .render(help_area, buf);
    }
}
