use std::rc::Rc;

use cellboard_models::Cell;
use gloo::console;
use uuid::Uuid;
use yew::prelude::*;

use crate::components::error_boundary::ErrorBoundary;
use crate::core::errors::UiError;
use crate::features::cells::state::{DashboardCell, clone_cell, demo_cells, remove_cell};
use crate::features::cells::view::CellTile;
use crate::i18n::TranslationBundle;
use preferences::{load_edit_mode, load_locale, load_open_policy, persist_edit_mode};

mod preferences;

#[function_component(CellboardApp)]
pub(crate) fn cellboard_app() -> Html {
    let locale = use_state(load_locale);
    let open_policy = use_state(load_open_policy);
    let edit_mode = use_state(load_edit_mode);
    let cells = use_state(demo_cells);
    let editing = use_state(|| None as Option<Uuid>);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |id: Uuid| {
            console::log!("configure cell", id.to_string());
            editing.set(Some(id));
        })
    };

    let on_csv_download = Callback::from(move |id: Uuid| {
        console::log!("csv download requested", id.to_string());
    });

    let on_clone = {
        let cells = cells.clone();
        Callback::from(move |cell: Rc<Cell>| -> Result<(), UiError> {
            let next = clone_cell(&cells, cell.id, Uuid::new_v4())?;
            console::log!("cloned cell", cell.id.to_string());
            cells.set(next);
            Ok(())
        })
    };

    let on_delete = {
        let cells = cells.clone();
        let editing = editing.clone();
        Callback::from(move |cell: Rc<Cell>| -> Result<(), UiError> {
            let next = remove_cell(&cells, cell.id)?;
            console::log!("deleted cell", cell.id.to_string());
            if *editing == Some(cell.id) {
                editing.set(None);
            }
            cells.set(next);
            Ok(())
        })
    };

    let on_toggle_edit_mode = {
        let edit_mode = edit_mode.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*edit_mode;
            persist_edit_mode(next);
            edit_mode.set(next);
        })
    };

    let fallback = AttrValue::from(bundle.text(
        "errors.cell_menu_unavailable",
        "Cell actions are unavailable.",
    ));

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main class="dashboard" dir={if bundle.rtl() { "rtl" } else { "ltr" }}>
                <header class="dashboard--header">
                    <h1>{bundle.text("dashboard.title", "Dashboard")}</h1>
                    <label class="label cursor-pointer gap-2">
                        <input
                            type="checkbox"
                            class="toggle toggle-sm"
                            aria-label="Edit mode"
                            checked={*edit_mode}
                            onclick={on_toggle_edit_mode}
                        />
                    </label>
                </header>
                if cells.is_empty() {
                    <p class="dashboard--empty">
                        {bundle.text("dashboard.empty", "This dashboard has no cells.")}
                    </p>
                }
                <div class="dashboard--grid">
                    {for cells.iter().map(|entry: &DashboardCell| {
                        let id = entry.cell.id;
                        html! {
                            <ErrorBoundary
                                key={id.to_string()}
                                scope={AttrValue::from(format!("cell-menu:{id}"))}
                                fallback={fallback.clone()}>
                                <CellTile
                                    entry={entry.clone()}
                                    is_editable={*edit_mode}
                                    editing={*editing == Some(id)}
                                    open_policy={*open_policy}
                                    on_edit={on_edit.clone()}
                                    on_csv_download={on_csv_download.clone()}
                                    on_clone={on_clone.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            </ErrorBoundary>
                        }
                    })}
                </div>
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the dashboard into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CellboardApp>::with_root(root).render();
    } else {
        yew::Renderer::<CellboardApp>::new().render();
    }
}
