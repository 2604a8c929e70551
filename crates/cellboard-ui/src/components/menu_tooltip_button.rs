//! Icon trigger with a dropdown of selectable entries.
//!
//! # Design
//! - Owns only its own open flag; callers learn about open/close through
//!   `inform_parent`, which fires once per transition.
//! - Click rules live in `core::menu_button`; this file only wires DOM events.

use std::cell::Cell;
use std::rc::Rc;

use crate::components::atoms::IconButton;
use crate::components::atoms::icons::trigger_icon;
use crate::core::cell_menu::{MenuTheme, TriggerIcon};
use crate::core::menu_button::{MenuClick, dismiss_menu, select_entry, toggle_menu};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

/// A dropdown row as the button renders it.
#[derive(Clone, PartialEq)]
pub(crate) struct MenuButtonEntry {
    pub(crate) label: AttrValue,
    pub(crate) disabled: bool,
    pub(crate) on_select: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct MenuTooltipButtonProps {
    pub(crate) icon: TriggerIcon,
    pub(crate) aria_label: AttrValue,
    pub(crate) entries: Vec<MenuButtonEntry>,
    #[prop_or_default]
    pub(crate) theme: MenuTheme,
    /// Fired on every open/close transition of this button's menu.
    #[prop_or_default]
    pub(crate) inform_parent: Callback<()>,
}

const fn theme_classes(theme: MenuTheme) -> (&'static str, Option<&'static str>) {
    match theme {
        MenuTheme::Default => ("btn-ghost", None),
        MenuTheme::Danger => ("btn-error", Some("text-error hover:bg-error/10")),
    }
}

fn apply_click(
    click: MenuClick,
    open: &UseStateHandle<bool>,
    inform_parent: &Callback<()>,
    on_select: Option<&Callback<()>>,
) {
    if click.run_entry {
        if let Some(on_select) = on_select {
            on_select.emit(());
        }
    }
    open.set(click.open);
    if click.inform_parent {
        inform_parent.emit(());
    }
}

#[function_component(MenuTooltipButton)]
pub(crate) fn menu_tooltip_button(props: &MenuTooltipButtonProps) -> Html {
    let open = use_state(|| false);
    let wrapper_ref = use_node_ref();
    let (trigger_class, entry_class) = theme_classes(props.theme);

    {
        let open = open.clone();
        let inform_parent = props.inform_parent.clone();
        let wrapper_ref = wrapper_ref.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = is_open.then(|| {
                    let handled = Rc::new(Cell::new(false));
                    EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok());
                        let inside = match (wrapper_ref.get(), target) {
                            (Some(wrapper), Some(target)) => wrapper.contains(Some(&target)),
                            _ => false,
                        };
                        if inside || handled.replace(true) {
                            return;
                        }
                        apply_click(dismiss_menu(true), &open, &inform_parent, None);
                    })
                });
                move || drop(listener)
            },
            *open,
        );
    }

    let on_trigger = {
        let open = open.clone();
        let inform_parent = props.inform_parent.clone();
        Callback::from(move |_: MouseEvent| {
            apply_click(toggle_menu(*open), &open, &inform_parent, None);
        })
    };

    let wrapper = classes!(
        "dropdown",
        "dropdown-end",
        (*open).then_some("dropdown-open"),
        props.theme.id().map(|theme| format!("menu-tooltip--{theme}"))
    );

    html! {
        <div class={wrapper} ref={wrapper_ref}>
            <IconButton
                aria_label={props.aria_label.clone()}
                class={classes!(trigger_class)}
                expanded={*open}
                onclick={on_trigger}>
                {trigger_icon(props.icon)}
            </IconButton>
            if *open {
                <ul
                    role="menu"
                    class="dropdown-content menu bg-base-100 rounded-box w-44 p-1 shadow">
                    {for props.entries.iter().map(|entry| {
                        let onclick = {
                            let open = open.clone();
                            let inform_parent = props.inform_parent.clone();
                            let on_select = entry.on_select.clone();
                            let disabled = entry.disabled;
                            Callback::from(move |_: MouseEvent| {
                                let click = select_entry(*open, disabled);
                                apply_click(click, &open, &inform_parent, Some(&on_select));
                            })
                        };
                        html! {
                            <li class={classes!(entry.disabled.then_some("menu-disabled"))}>
                                <button
                                    type="button"
                                    role="menuitem"
                                    class={classes!("justify-start", entry_class)}
                                    disabled={entry.disabled}
                                    onclick={onclick}>
                                    {entry.label.clone()}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
