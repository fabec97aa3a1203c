use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use accent::app::{r#loop::run_loop, state::AppState, widget::ThemeConfigWidget};
use accent::config::AppConfig;
use accent::domain::layout::LayoutService;
use accent::domain::style_root::StyleVariables;
use accent::{infrastructure, logging};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    // Build the store BEFORE terminal setup so a bad config doesn't leave the
    // terminal in raw mode.
    let config = AppConfig::load();
    let store = infrastructure::build_store(&config.store)?;
    tracing::info!("Theme settings store: {}", store.describe());

    let layout = LayoutService::new(config.layout.clone());
    let widget = ThemeConfigWidget::new(layout, Arc::new(StyleVariables::new()));
    let app_state = AppState::new(widget, &config.keys);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Exited with error: {err:#}");
        println!("{err:?}");
    }

    Ok(())
}
