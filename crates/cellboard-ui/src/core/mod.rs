//! Core, DOM-free primitives and helpers for the Web UI.
pub mod cell_menu;
pub mod errors;
pub mod menu_button;
