use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::help::HelpModal;
use crate::components::palette_grid::PaletteGrid;
use crate::components::scheme_selector::SchemeSelector;
use crate::components::variables::VariablesPanel;
use crate::domain::settings::ColorScheme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    widgets::Block,
    Frame,
};

const SCHEME_HEIGHT: u16 = 3;
const PALETTE_HEIGHT: u16 = 5;

pub struct AppLayout {
    pub header: Rect,
    pub scheme: Rect,
    pub palette: Rect,
    pub variables: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SCHEME_HEIGHT),
            Constraint::Length(PALETTE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(main[1]);

    AppLayout {
        header: main[0],
        scheme: body[0],
        palette: body[1],
        variables: body[2],
        footer: main[2],
    }
}

/// One clickable cell per color scheme, inside the section border.
pub fn scheme_cells(section: Rect) -> Vec<Rect> {
    split_even(inner(section), ColorScheme::all().len())
}

/// One clickable cell per preset, inside the section border.
pub fn palette_cells(section: Rect, count: usize) -> Vec<Rect> {
    split_even(inner(section), count)
}

fn inner(section: Rect) -> Rect {
    section.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

fn split_even(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    f.render_widget(Block::default().style(theme.list_item), f.area());

    f.render_widget(
        Header {
            app_state,
            theme,
        },
        layout.header,
    );
    f.render_widget(
        SchemeSelector {
            app_state,
            theme,
        },
        layout.scheme,
    );
    f.render_widget(
        PaletteGrid {
            app_state,
            theme,
        },
        layout.palette,
    );
    f.render_widget(
        VariablesPanel {
            variables: app_state.widget.style_root().snapshot(),
            theme,
        },
        layout.variables,
    );
    f.render_widget(
        Footer {
            mode: app_state.mode,
            theme,
        },
        layout.footer,
    );

    if app_state.mode == AppMode::Help {
        f.render_widget(HelpModal { theme }, f.area());
    }
}
