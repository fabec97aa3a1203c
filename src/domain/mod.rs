pub mod layout;
pub mod settings;
pub mod store;
pub mod style_root;
