//! Cell context menu and dashboard tile components.

use std::rc::Rc;

use cellboard_models::{Cell, CellQuery};
use uuid::Uuid;
use yew::prelude::*;

use crate::components::error_boundary::ErrorReporter;
use crate::components::menu_tooltip_button::{MenuButtonEntry, MenuTooltipButton};
use crate::core::cell_menu::{
    BUTTONS_CLASS, CellMenuView, MenuTrigger, OpenStateAction, OpenStatePolicy, SubMenuOpenState,
    TriggerKind, cell_menu_triggers, context_menu_class,
};
use crate::core::errors::UiError;
use crate::features::cells::actions::CellMenuCallbacks;
use crate::features::cells::state::DashboardCell;
use crate::i18n::TranslationBundle;

/// Props supplied by the container that owns the cell.
#[derive(Properties, PartialEq, Clone)]
pub(crate) struct CellMenuProps {
    /// Cell passed through to the clone and delete callbacks.
    pub(crate) cell: Rc<Cell>,
    /// View-only cells render no triggers.
    pub(crate) is_editable: bool,
    /// Enables "Download CSV".
    pub(crate) data_exists: bool,
    /// "Configure" selected.
    #[prop_or_default]
    pub(crate) on_edit: Callback<()>,
    /// "Clone Cell" selected.
    #[prop_or_default]
    pub(crate) on_clone: Callback<Rc<Cell>>,
    /// "Confirm" selected in the delete menu.
    #[prop_or_default]
    pub(crate) on_delete: Callback<Rc<Cell>>,
    /// "Download CSV" selected.
    #[prop_or_default]
    pub(crate) on_csv_download: Callback<()>,
    /// Queries backing the cell; the edit trigger needs at least one.
    #[prop_or_default]
    pub(crate) queries: Vec<CellQuery>,
    /// How sub-menu toggles fold into the wrapper's open modifier. A change
    /// restarts the menu closed.
    #[prop_or_default]
    pub(crate) open_policy: OpenStatePolicy,
}

#[derive(PartialEq)]
struct OpenState(SubMenuOpenState);

impl Reducible for OpenState {
    type Action = OpenStateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(&action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

fn render_trigger(
    trigger: MenuTrigger,
    callbacks: &CellMenuCallbacks,
    cell: &Rc<Cell>,
    open_state: &UseReducerDispatcher<OpenState>,
) -> Html {
    let entries = trigger
        .entries
        .into_iter()
        .map(|entry| {
            let disabled = entry.disabled;
            let label = AttrValue::from(entry.label.clone());
            let on_select = {
                let callbacks = callbacks.clone();
                let cell = Rc::clone(cell);
                Callback::from(move |()| {
                    callbacks.select(&entry, &cell);
                })
            };
            MenuButtonEntry {
                label,
                disabled,
                on_select,
            }
        })
        .collect::<Vec<_>>();
    let inform_parent = {
        let open_state = open_state.clone();
        let kind = trigger.kind;
        Callback::from(move |()| open_state.dispatch(OpenStateAction::Toggle(kind)))
    };
    html! {
        <MenuTooltipButton
            key={trigger.icon.id()}
            icon={trigger.icon}
            theme={trigger.theme}
            aria_label={AttrValue::from(trigger.aria_label)}
            entries={entries}
            inform_parent={inform_parent}
        />
    }
}

/// Context menu attached to a dashboard cell.
#[function_component(CellMenu)]
pub(crate) fn cell_menu(props: &CellMenuProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let policy = props.open_policy;
    let open_state = use_reducer(move || OpenState(SubMenuOpenState::new(policy)));

    let view = CellMenuView {
        is_editable: props.is_editable,
        data_exists: props.data_exists,
        has_queries: !props.queries.is_empty(),
    };
    let triggers = cell_menu_triggers(view, &bundle);
    let rendered: Vec<TriggerKind> = triggers.iter().map(|trigger| trigger.kind).collect();

    {
        let dispatcher = open_state.dispatcher();
        use_effect_with_deps(
            move |rendered: &Vec<TriggerKind>| {
                dispatcher.dispatch(OpenStateAction::Rendered(rendered.clone()));
                || ()
            },
            rendered,
        );
    }
    {
        let dispatcher = open_state.dispatcher();
        use_effect_with_deps(
            move |policy: &OpenStatePolicy| {
                dispatcher.dispatch(OpenStateAction::Policy(*policy));
                || ()
            },
            policy,
        );
    }

    let callbacks = CellMenuCallbacks {
        on_edit: props.on_edit.clone(),
        on_clone: props.on_clone.clone(),
        on_delete: props.on_delete.clone(),
        on_csv_download: props.on_csv_download.clone(),
    };
    let dispatcher = open_state.dispatcher();

    let content = if triggers.is_empty() {
        html! {}
    } else {
        html! {
            <div class={BUTTONS_CLASS}>
                {for triggers
                    .into_iter()
                    .map(|trigger| render_trigger(trigger, &callbacks, &props.cell, &dispatcher))}
            </div>
        }
    };

    html! {
        <div class={context_menu_class(open_state.0.is_open())}>
            {content}
        </div>
    }
}

/// Props for one dashboard tile.
#[derive(Properties, PartialEq)]
pub(crate) struct CellTileProps {
    /// Cell and its display data.
    pub(crate) entry: DashboardCell,
    /// Whether the dashboard is in edit mode.
    pub(crate) is_editable: bool,
    /// Whether this tile is the one being configured.
    #[prop_or_default]
    pub(crate) editing: bool,
    /// Open-state policy forwarded to the menu.
    #[prop_or_default]
    pub(crate) open_policy: OpenStatePolicy,
    /// Configure requested for the cell id.
    pub(crate) on_edit: Callback<Uuid>,
    /// CSV export requested for the cell id.
    pub(crate) on_csv_download: Callback<Uuid>,
    /// Clone requested; failures go to the nearest error boundary.
    pub(crate) on_clone: Callback<Rc<Cell>, Result<(), UiError>>,
    /// Delete requested; failures go to the nearest error boundary.
    pub(crate) on_delete: Callback<Rc<Cell>, Result<(), UiError>>,
}

fn reporting(
    action: &Callback<Rc<Cell>, Result<(), UiError>>,
    reporter: Option<ErrorReporter>,
) -> Callback<Rc<Cell>> {
    let action = action.clone();
    Callback::from(move |cell: Rc<Cell>| {
        if let Err(error) = action.emit(cell) {
            if let Some(reporter) = &reporter {
                reporter.report(error);
            }
        }
    })
}

/// Dashboard tile: title bar with the cell menu and a query preview.
#[function_component(CellTile)]
pub(crate) fn cell_tile(props: &CellTileProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let reporter = use_context::<ErrorReporter>();
    let id = props.entry.cell.id;

    let on_edit = props.on_edit.reform(move |()| id);
    let on_csv_download = props.on_csv_download.reform(move |()| id);
    let on_clone = reporting(&props.on_clone, reporter.clone());
    let on_delete = reporting(&props.on_delete, reporter);

    let cell = &props.entry.cell;
    let style = format!(
        "grid-column: {} / span {}; grid-row: {} / span {};",
        cell.x + 1,
        cell.w,
        cell.y + 1,
        cell.h
    );

    html! {
        <section
            class={classes!("dash-graph", props.editing.then_some("dash-graph--editing"))}
            style={style}>
            <header class="dash-graph--heading">
                <span class="dash-graph--name">{props.entry.name.clone()}</span>
                if props.editing {
                    <span class="badge badge-info badge-sm">
                        {bundle.text("dashboard.editing", "Editing cell")}
                    </span>
                }
                <CellMenu
                    cell={Rc::clone(cell)}
                    is_editable={props.is_editable}
                    data_exists={props.entry.data_exists}
                    on_edit={on_edit}
                    on_clone={on_clone}
                    on_delete={on_delete}
                    on_csv_download={on_csv_download}
                    queries={props.entry.queries.clone()}
                    open_policy={props.open_policy}
                />
            </header>
            <div class="dash-graph--container">
                {for props.entry.queries.iter().map(|query| html! {
                    <pre class="dash-graph--query">{query.text.clone()}</pre>
                })}
            </div>
        </section>
    }
}
