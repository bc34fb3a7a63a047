pub mod catalog;
pub mod error;
pub mod state;
pub mod synth;
pub mod tui;
// cmd and reports are binary modules (declared in main.rs).
