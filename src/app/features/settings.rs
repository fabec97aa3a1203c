use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{scheme_index, AppState},
};
use crate::domain::store::SettingsStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SetScheme(scheme) => {
            let command = state.widget.set_scheme(*scheme);
            state.scheme_cursor = scheme_index(*scheme);
            state.refresh_theme();
            UpdateResult::Handled(Some(command))
        }
        Action::SelectPalette(index) => {
            let Some(option) = state.widget.themes().get(*index) else {
                return UpdateResult::Handled(None);
            };
            let command = state.widget.select_palette(option);
            state.palette_cursor = *index;
            state.refresh_theme();
            UpdateResult::Handled(Some(command))
        }
        Action::SettingsLoaded(settings) => {
            state.widget.settings_loaded(settings.clone());
            state.scheme_cursor = scheme_index(state.widget.selected_scheme);
            state.sync_palette_cursor();
            state.refresh_theme();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Runs a command against the store on its own task.
///
/// Loads report back through `tx`; saves are fire-and-forget and only ever
/// log. Failures never reach the UI state.
pub fn handle_command(
    command: Command,
    store: Arc<dyn SettingsStore>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadSettings => {
            tokio::spawn(async move {
                match store.get_theme_settings().await {
                    Ok(settings) => {
                        let _ = tx.send(Action::SettingsLoaded(settings)).await;
                    }
                    Err(e) => {
                        tracing::error!("Error loading theme settings: {e:#}");
                    }
                }
            });
        }
        Command::SaveSettings(settings) => {
            tokio::spawn(async move {
                if let Err(e) = store.save_theme_settings(settings).await {
                    tracing::error!("Error saving theme settings: {e:#}");
                }
            });
        }
    }
    Ok(())
}
