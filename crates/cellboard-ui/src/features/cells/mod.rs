//! Dashboard cell feature wiring.
//!
//! # Design
//! - The cell menu only forwards selections; the dashboard owns every side effect.
//! - Pure list transformations live in `state` so they run under native tests.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
