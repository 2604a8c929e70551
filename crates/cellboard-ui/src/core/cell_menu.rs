//! Menu derivation for the dashboard cell context menu.
//!
//! # Design
//! - Menus are recomputed from props on every render; nothing is cached.
//! - Entries carry a [`CellMenuAction`] instead of a closure so the view decides
//!   how to reach the parent callbacks.
//! - Open-state tracking is a value type; the view owns the only instance.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::core::errors::PreferenceError;
use crate::i18n::TranslationBundle;

/// Outer wrapper class for the cell context menu.
pub const CONTEXT_CLASS: &str = "dash-graph-context";
/// Modifier applied to the wrapper while any sub-menu is open.
pub const CONTEXT_OPEN_CLASS: &str = "dash-graph-context__open";
/// Class of the horizontal trigger group.
pub const BUTTONS_CLASS: &str = "dash-graph-context--buttons";

/// Which sub-menu a trigger opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriggerKind {
    /// Configure / download menu; only shown for cells with queries.
    Edit,
    /// Clone menu.
    Clone,
    /// Delete confirmation menu.
    Delete,
}

/// Icon rendered on a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerIcon {
    /// Pencil (edit).
    Pencil,
    /// Two stacked sheets (clone).
    Duplicate,
    /// Trash can (delete).
    Trash,
}

impl TriggerIcon {
    /// Icon identifier handed to the menu button.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Duplicate => "duplicate",
            Self::Trash => "trash",
        }
    }
}

/// Visual theme of a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuTheme {
    /// Neutral styling.
    #[default]
    Default,
    /// Hazardous action styling.
    Danger,
}

impl MenuTheme {
    /// Theme identifier, `None` for the neutral theme.
    #[must_use]
    pub const fn id(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Danger => Some("danger"),
        }
    }
}

/// Action a menu entry performs when selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMenuAction {
    /// Open the cell editor.
    Configure,
    /// Export the cell's current data as CSV.
    DownloadCsv,
    /// Duplicate the cell.
    CloneCell,
    /// Remove the cell.
    DeleteCell,
}

/// One selectable row inside a sub-menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMenuEntry {
    /// Localised label.
    pub label: String,
    /// Action performed on selection.
    pub action: CellMenuAction,
    /// Disabled entries render but never fire.
    pub disabled: bool,
}

impl CellMenuEntry {
    fn enabled(label: String, action: CellMenuAction) -> Self {
        Self {
            label,
            action,
            disabled: false,
        }
    }

    /// Action to run when the entry is selected, `None` while disabled.
    #[must_use]
    pub const fn activate(&self) -> Option<CellMenuAction> {
        if self.disabled {
            None
        } else {
            Some(self.action)
        }
    }
}

/// Everything the menu button needs to render one trigger and its sub-menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTrigger {
    /// Sub-menu identity.
    pub kind: TriggerKind,
    /// Trigger icon.
    pub icon: TriggerIcon,
    /// Trigger theme.
    pub theme: MenuTheme,
    /// Accessible label for the trigger.
    pub aria_label: String,
    /// Sub-menu rows.
    pub entries: Vec<CellMenuEntry>,
}

/// The subset of cell menu props that shapes the rendered menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellMenuView {
    /// Whether any action UI renders.
    pub is_editable: bool,
    /// Whether the cell currently has data to export.
    pub data_exists: bool,
    /// Whether the cell has at least one query.
    pub has_queries: bool,
}

/// Entries of the edit sub-menu. CSV export is disabled while there is no data.
#[must_use]
pub fn edit_menu_entries(bundle: &TranslationBundle, data_exists: bool) -> Vec<CellMenuEntry> {
    vec![
        CellMenuEntry::enabled(
            bundle.text("cell_menu.configure", "Configure"),
            CellMenuAction::Configure,
        ),
        CellMenuEntry {
            label: bundle.text("cell_menu.download_csv", "Download CSV"),
            action: CellMenuAction::DownloadCsv,
            disabled: !data_exists,
        },
    ]
}

/// Entries of the clone sub-menu.
#[must_use]
pub fn clone_menu_entries(bundle: &TranslationBundle) -> Vec<CellMenuEntry> {
    vec![CellMenuEntry::enabled(
        bundle.text("cell_menu.clone", "Clone Cell"),
        CellMenuAction::CloneCell,
    )]
}

/// Entries of the delete sub-menu.
#[must_use]
pub fn delete_menu_entries(bundle: &TranslationBundle) -> Vec<CellMenuEntry> {
    vec![CellMenuEntry::enabled(
        bundle.text("cell_menu.confirm_delete", "Confirm"),
        CellMenuAction::DeleteCell,
    )]
}

/// Triggers to render, in display order. Empty when the cell is view-only.
#[must_use]
pub fn cell_menu_triggers(view: CellMenuView, bundle: &TranslationBundle) -> Vec<MenuTrigger> {
    if !view.is_editable {
        return Vec::new();
    }
    let mut triggers = Vec::with_capacity(3);
    if view.has_queries {
        triggers.push(MenuTrigger {
            kind: TriggerKind::Edit,
            icon: TriggerIcon::Pencil,
            theme: MenuTheme::Default,
            aria_label: bundle.text("cell_menu.edit", "Edit cell"),
            entries: edit_menu_entries(bundle, view.data_exists),
        });
    }
    triggers.push(MenuTrigger {
        kind: TriggerKind::Clone,
        icon: TriggerIcon::Duplicate,
        theme: MenuTheme::Default,
        aria_label: bundle.text("cell_menu.clone_trigger", "Clone cell"),
        entries: clone_menu_entries(bundle),
    });
    triggers.push(MenuTrigger {
        kind: TriggerKind::Delete,
        icon: TriggerIcon::Trash,
        theme: MenuTheme::Danger,
        aria_label: bundle.text("cell_menu.delete_trigger", "Delete cell"),
        entries: delete_menu_entries(bundle),
    });
    triggers
}

/// Wrapper class list for the given open state.
#[must_use]
pub fn context_menu_class(open: bool) -> String {
    if open {
        format!("{CONTEXT_CLASS} {CONTEXT_OPEN_CLASS}")
    } else {
        CONTEXT_CLASS.to_string()
    }
}

/// How toggle reports from the sub-menus are folded into the open flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenStatePolicy {
    /// One boolean inverted by every report, whichever trigger sent it.
    #[default]
    SharedToggle,
    /// Track each trigger separately; open while any trigger is open.
    PerTrigger,
}

impl OpenStatePolicy {
    /// Stored preference spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SharedToggle => "shared-toggle",
            Self::PerTrigger => "per-trigger",
        }
    }
}

impl FromStr for OpenStatePolicy {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "shared-toggle" | "shared" => Ok(Self::SharedToggle),
            "per-trigger" => Ok(Self::PerTrigger),
            other => Err(PreferenceError::UnknownValue {
                key: "cell_menu.open_policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether any sub-menu of a cell menu is open.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SubMenuOpenState {
    policy: OpenStatePolicy,
    flag: bool,
    open: BTreeSet<TriggerKind>,
}

impl SubMenuOpenState {
    /// Closed state under the given policy.
    #[must_use]
    pub const fn new(policy: OpenStatePolicy) -> Self {
        Self {
            policy,
            flag: false,
            open: BTreeSet::new(),
        }
    }

    /// State after `trigger` reported an open/close toggle.
    #[must_use]
    pub fn toggled(&self, trigger: TriggerKind) -> Self {
        let mut next = self.clone();
        match self.policy {
            OpenStatePolicy::SharedToggle => next.flag = !self.flag,
            OpenStatePolicy::PerTrigger => {
                if !next.open.remove(&trigger) {
                    next.open.insert(trigger);
                }
            }
        }
        next
    }

    /// Whether the wrapper should carry the open modifier.
    #[must_use]
    pub fn is_open(&self) -> bool {
        match self.policy {
            OpenStatePolicy::SharedToggle => self.flag,
            OpenStatePolicy::PerTrigger => !self.open.is_empty(),
        }
    }

    /// Policy in effect.
    #[must_use]
    pub const fn policy(&self) -> OpenStatePolicy {
        self.policy
    }

    /// State after the rendered triggers changed to `rendered`.
    ///
    /// Under [`OpenStatePolicy::PerTrigger`] triggers that are no longer rendered
    /// are forgotten, so a remounted button starts closed on both sides. The
    /// shared flag is left alone.
    #[must_use]
    pub fn retain_triggers(&self, rendered: &[TriggerKind]) -> Self {
        let mut next = self.clone();
        next.open.retain(|kind| rendered.contains(kind));
        next
    }

    /// State under `policy`; a changed policy starts closed.
    #[must_use]
    pub fn with_policy(&self, policy: OpenStatePolicy) -> Self {
        if policy == self.policy {
            self.clone()
        } else {
            Self::new(policy)
        }
    }

    /// Fold one event into the state.
    #[must_use]
    pub fn apply(&self, action: &OpenStateAction) -> Self {
        match action {
            OpenStateAction::Toggle(trigger) => self.toggled(*trigger),
            OpenStateAction::Rendered(kinds) => self.retain_triggers(kinds),
            OpenStateAction::Policy(policy) => self.with_policy(*policy),
        }
    }
}

/// Events that change a cell menu's open state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenStateAction {
    /// A sub-menu reported an open/close toggle.
    Toggle(TriggerKind),
    /// The set of rendered triggers changed.
    Rendered(Vec<TriggerKind>),
    /// The configured policy changed.
    Policy(OpenStatePolicy),
}
