use crate::domain::settings::ThemeSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadSettings,
    SaveSettings(ThemeSettings),
}
