pub mod format;
pub mod loader;
pub mod state;
pub mod types;
pub mod view;
