use super::action::Action;
use super::state::AppMode;
use crate::domain::settings::ColorScheme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub help_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut help_mode = HashMap::new();

        // --- Global / Normal Mode ---
        global.insert(key('q'), Action::Quit);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusPrev);
        global.insert(key(KeyCode::Left), Action::CursorLeft);
        global.insert(key(KeyCode::Right), Action::CursorRight);
        if config.profile == "vim" {
            global.insert(key('h'), Action::CursorLeft);
            global.insert(key('l'), Action::CursorRight);
            global.insert(key('k'), Action::FocusPrev);
            global.insert(key('j'), Action::FocusNext);
        }
        global.insert(key(KeyCode::Up), Action::FocusPrev);
        global.insert(key(KeyCode::Down), Action::FocusNext);
        global.insert(key(KeyCode::Enter), Action::ActivateFocus);
        global.insert(key(' '), Action::ActivateFocus);
        global.insert(key('D'), Action::SetScheme(ColorScheme::Dark));
        global.insert(key('L'), Action::SetScheme(ColorScheme::Light));
        for (i, digit) in ('1'..='9').enumerate().take(crate::theme::THEME_OPTIONS.len()) {
            global.insert(key(digit), Action::SelectPalette(i));
        }
        global.insert(key('?'), Action::ToggleHelp);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Help Overlay ---
        help_mode.insert(key('?'), Action::ToggleHelp);
        help_mode.insert(key(KeyCode::Esc), Action::CancelMode);
        help_mode.insert(key('q'), Action::CancelMode);

        if let Some(custom) = &config.custom {
            for (binding, action) in custom {
                match (parse_key(binding), parse_action(action)) {
                    (Some(k), Some(a)) => {
                        global.insert(k, a);
                    }
                    _ => tracing::warn!("Ignoring key binding {binding:?} = {action:?}"),
                }
            }
        }

        Self { global, help_mode }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        if mode == AppMode::Help {
            // The overlay swallows everything it doesn't handle itself.
            return self.help_mode.get(&event).cloned();
        }
        self.global.get(&event).cloned()
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

fn parse_key(binding: &str) -> Option<KeyEvent> {
    let code = match binding {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(key(code))
}

fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" => Action::Quit,
        "focus_next" => Action::FocusNext,
        "focus_prev" => Action::FocusPrev,
        "left" => Action::CursorLeft,
        "right" => Action::CursorRight,
        "activate" => Action::ActivateFocus,
        "dark" => Action::SetScheme(ColorScheme::Dark),
        "light" => Action::SetScheme(ColorScheme::Light),
        "help" => Action::ToggleHelp,
        other => {
            let index = other.strip_prefix("palette_")?.parse::<usize>().ok()?;
            if index == 0 || index > crate::theme::THEME_OPTIONS.len() {
                return None;
            }
            Action::SelectPalette(index - 1)
        }
    };
    Some(action)
}
