pub mod footer;
pub mod header;
pub mod help;
pub mod helpers;
pub mod palette_grid;
pub mod scheme_selector;
pub mod variables;
