use crate::app::state::AppMode;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct Footer<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
}

fn items(mode: AppMode) -> &'static [FooterItem] {
    match mode {
        AppMode::Normal => &[
            FooterItem { key: "Tab", desc: "section" },
            FooterItem { key: "h/l", desc: "move" },
            FooterItem { key: "Enter", desc: "apply" },
            FooterItem { key: "D/L", desc: "dark/light" },
            FooterItem { key: "1-5", desc: "palette" },
            FooterItem { key: "?", desc: "help" },
            FooterItem { key: "q", desc: "quit" },
        ],
        AppMode::Help => &[FooterItem { key: "Esc", desc: "close help" }],
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        let mut width = 0usize;
        let available = area.width as usize;

        for item in items(self.mode) {
            let item_width = item.key.len() + item.desc.len() + 4;
            if width + item_width > available {
                break;
            }
            spans.push(Span::styled(
                format!(" {} ", item.key),
                self.theme.footer_segment_key,
            ));
            spans.push(Span::styled(
                format!(" {} ", item.desc),
                self.theme.footer_segment_val,
            ));
            width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
