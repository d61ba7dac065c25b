//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: the formatted value with the pending expression above it
//! - [`keypad`]: the labeled button grid, recording hit areas for the mouse
//! - [`status`]: status bar with keybindings and calculator state
//!
//! Each pane module exports a primary `render_*` function and, where it needs
//! more than a couple of values, a `*RenderData` struct borrowed from the app.

pub mod display;
pub mod keypad;
pub mod status;

// Re-export render functions for convenience
pub use display::{render_display_pane, DisplayRenderData};
pub use keypad::render_keypad_pane;
pub use status::{render_status_bar, StatusRenderData};
