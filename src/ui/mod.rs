//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod create_panel;
pub mod employees_panel;

pub use app::App;
