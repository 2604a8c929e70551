//! Feature slices of the dashboard UI.
pub mod cells;
