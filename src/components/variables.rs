use crate::theme::{parse_css_color, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};
use std::collections::BTreeMap;

/// Read-back of the style root: every variable currently applied.
pub struct VariablesPanel<'a> {
    pub variables: BTreeMap<String, String>,
    pub theme: &'a Theme,
}

impl Widget for VariablesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" Style Variables ({}) ", self.variables.len()),
                self.theme.section_title,
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        if self.variables.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.width > 0 && inner.height > 0 {
                buf.set_stringn(
                    inner.x + 1,
                    inner.y,
                    "No accent applied; using the scheme defaults",
                    inner.width.saturating_sub(1) as usize,
                    self.theme.dimmed,
                );
            }
            return;
        }

        let rows = self.variables.iter().map(|(key, value)| {
            let chip = match parse_css_color(value) {
                Some(color) => Span::styled("  ", Style::default().bg(color)),
                None => Span::raw("  "),
            };
            Row::new(vec![
                Cell::from(chip),
                Cell::from(Span::styled(key.clone(), self.theme.var_key)),
                Cell::from(Span::styled(value.clone(), self.theme.var_value)),
            ])
        });

        let widths = [
            Constraint::Length(2),
            Constraint::Length(30),
            Constraint::Min(10),
        ];
        Table::new(rows, widths)
            .column_spacing(1)
            .block(block)
            .render(area, buf);
    }
}
