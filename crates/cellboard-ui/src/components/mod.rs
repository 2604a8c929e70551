pub(crate) mod atoms;
pub(crate) mod error_boundary;
pub(crate) mod menu_tooltip_button;
