//! Shared UI atoms used by the cell menu and the dashboard grid.

pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use icon_button::IconButton;
