#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Cellboard Web UI.
//! Dashboard cell context menus, the menu button they render through, and a
//! demo dashboard that plays the role of the owning container.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::cell_menu::{CellMenuView, TriggerKind, cell_menu_triggers};
    use crate::features::cells::state::demo_cells;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn demo_dashboard_menus_match_cell_shapes() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let shapes: Vec<Vec<TriggerKind>> = demo_cells()
            .iter()
            .map(|entry| {
                let view = CellMenuView {
                    is_editable: true,
                    data_exists: entry.data_exists,
                    has_queries: !entry.queries.is_empty(),
                };
                cell_menu_triggers(view, &bundle)
                    .into_iter()
                    .map(|trigger| trigger.kind)
                    .collect()
            })
            .collect();
        assert_eq!(shapes[0].len(), 3);
        assert_eq!(shapes[1].len(), 3);
        assert_eq!(shapes[2], [TriggerKind::Clone, TriggerKind::Delete]);
    }
}
