//! Click handling for a single menu button, kept free of the DOM.
//!
//! Every transition of the dropdown between open and closed informs the parent
//! exactly once, so a parent folding reports into one flag sees them paired.

/// What a click on (or around) a menu button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuClick {
    /// Dropdown state after the click.
    pub open: bool,
    /// Run the clicked entry's action.
    pub run_entry: bool,
    /// Send one open/close report to the parent.
    pub inform_parent: bool,
}

/// Click on the trigger icon: flip the dropdown and report it.
#[must_use]
pub const fn toggle_menu(open: bool) -> MenuClick {
    MenuClick {
        open: !open,
        run_entry: false,
        inform_parent: true,
    }
}

/// Click on a dropdown entry. Enabled entries run and close the menu;
/// disabled entries change nothing.
#[must_use]
pub const fn select_entry(open: bool, disabled: bool) -> MenuClick {
    if disabled || !open {
        MenuClick {
            open,
            run_entry: false,
            inform_parent: false,
        }
    } else {
        MenuClick {
            open: false,
            run_entry: true,
            inform_parent: true,
        }
    }
}

/// Pointer press outside the button: close an open dropdown.
#[must_use]
pub const fn dismiss_menu(open: bool) -> MenuClick {
    MenuClick {
        open: false,
        run_entry: false,
        inform_parent: open,
    }
}
