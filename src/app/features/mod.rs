pub mod navigation;
pub mod settings;

pub use settings::handle_command;
