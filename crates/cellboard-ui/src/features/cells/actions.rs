//! Routing of cell menu selections to the parent's callbacks.

use std::rc::Rc;

use cellboard_models::Cell;
use yew::Callback;

use crate::core::cell_menu::{CellMenuAction, CellMenuEntry};

/// Callbacks a parent supplies to a cell menu.
#[derive(Clone, PartialEq, Default)]
pub struct CellMenuCallbacks {
    /// Invoked with no arguments on "Configure".
    pub on_edit: Callback<()>,
    /// Invoked with the menu's cell on "Clone Cell".
    pub on_clone: Callback<Rc<Cell>>,
    /// Invoked with the menu's cell on "Confirm".
    pub on_delete: Callback<Rc<Cell>>,
    /// Invoked with no arguments on "Download CSV".
    pub on_csv_download: Callback<()>,
}

impl CellMenuCallbacks {
    /// Invoke the callback matching `action`, passing `cell` through unchanged.
    pub fn dispatch(&self, action: CellMenuAction, cell: &Rc<Cell>) {
        match action {
            CellMenuAction::Configure => self.on_edit.emit(()),
            CellMenuAction::DownloadCsv => self.on_csv_download.emit(()),
            CellMenuAction::CloneCell => self.on_clone.emit(Rc::clone(cell)),
            CellMenuAction::DeleteCell => self.on_delete.emit(Rc::clone(cell)),
        }
    }

    /// Run `entry` unless it is disabled. Returns whether a callback fired.
    pub fn select(&self, entry: &CellMenuEntry, cell: &Rc<Cell>) -> bool {
        let Some(action) = entry.activate() else {
            return false;
        };
        self.dispatch(action, cell);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell_menu::edit_menu_entries;
    use crate::i18n::TranslationBundle;
    use std::cell::RefCell;
    use uuid::Uuid;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Edit,
        Csv,
        Clone(Uuid),
        Delete(Uuid),
    }

    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
        cells: Rc<RefCell<Vec<Rc<Cell>>>>,
        callbacks: CellMenuCallbacks,
    }

    fn recorder() -> Recorder {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let cells = Rc::new(RefCell::new(Vec::new()));
        let callbacks = CellMenuCallbacks {
            on_edit: {
                let calls = Rc::clone(&calls);
                Callback::from(move |()| calls.borrow_mut().push(Call::Edit))
            },
            on_csv_download: {
                let calls = Rc::clone(&calls);
                Callback::from(move |()| calls.borrow_mut().push(Call::Csv))
            },
            on_clone: {
                let calls = Rc::clone(&calls);
                let cells = Rc::clone(&cells);
                Callback::from(move |cell: Rc<Cell>| {
                    calls.borrow_mut().push(Call::Clone(cell.id));
                    cells.borrow_mut().push(cell);
                })
            },
            on_delete: {
                let calls = Rc::clone(&calls);
                let cells = Rc::clone(&cells);
                Callback::from(move |cell: Rc<Cell>| {
                    calls.borrow_mut().push(Call::Delete(cell.id));
                    cells.borrow_mut().push(cell);
                })
            },
        };
        Recorder {
            calls,
            cells,
            callbacks,
        }
    }

    fn sample_cell() -> Rc<Cell> {
        Rc::new(Cell::new(Uuid::from_u128(7), Uuid::from_u128(70), 0, 0, 4, 4))
    }

    #[test]
    fn configure_calls_on_edit_once() {
        let rec = recorder();
        rec.callbacks.dispatch(CellMenuAction::Configure, &sample_cell());
        assert_eq!(*rec.calls.borrow(), [Call::Edit]);
    }

    #[test]
    fn csv_download_calls_its_callback_once() {
        let rec = recorder();
        rec.callbacks.dispatch(CellMenuAction::DownloadCsv, &sample_cell());
        assert_eq!(*rec.calls.borrow(), [Call::Csv]);
    }

    #[test]
    fn clone_passes_the_same_cell() {
        let rec = recorder();
        let cell = sample_cell();
        rec.callbacks.dispatch(CellMenuAction::CloneCell, &cell);
        assert_eq!(*rec.calls.borrow(), [Call::Clone(cell.id)]);
        assert!(Rc::ptr_eq(&rec.cells.borrow()[0], &cell));
    }

    #[test]
    fn delete_passes_the_same_cell() {
        let rec = recorder();
        let cell = sample_cell();
        rec.callbacks.dispatch(CellMenuAction::DeleteCell, &cell);
        assert_eq!(*rec.calls.borrow(), [Call::Delete(cell.id)]);
        assert!(Rc::ptr_eq(&rec.cells.borrow()[0], &cell));
        assert_eq!(*cell, *sample_cell());
    }

    #[test]
    fn disabled_csv_entry_reaches_no_callback() {
        let rec = recorder();
        let entries = edit_menu_entries(&TranslationBundle::default(), false);
        assert!(!rec.callbacks.select(&entries[1], &sample_cell()));
        assert!(rec.calls.borrow().is_empty());

        assert!(rec.callbacks.select(&entries[0], &sample_cell()));
        assert_eq!(*rec.calls.borrow(), [Call::Edit]);
    }

    #[test]
    fn enabled_csv_entry_reaches_its_callback() {
        let rec = recorder();
        let entries = edit_menu_entries(&TranslationBundle::default(), true);
        assert!(rec.callbacks.select(&entries[1], &sample_cell()));
        assert_eq!(*rec.calls.borrow(), [Call::Csv]);
    }
}
