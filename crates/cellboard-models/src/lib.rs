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
#![allow(clippy::multiple_crate_versions)]
//! Dashboard data model shared by the Cellboard front end.
//!
//! Cells and their queries arrive from the dashboards API as JSON. The UI only
//! reads them: menus pass a cell through to parent callbacks untouched, and
//! the query list decides whether a cell can be edited at all.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard tile showing one visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Stable cell identifier.
    pub id: Uuid,
    /// View (visualization configuration) rendered inside the cell.
    pub view_id: Uuid,
    /// Grid column of the top-left corner.
    pub x: i32,
    /// Grid row of the top-left corner.
    pub y: i32,
    /// Width in grid units.
    pub w: i32,
    /// Height in grid units.
    pub h: i32,
}

impl Cell {
    /// Build a cell at the given grid position.
    #[must_use]
    pub const fn new(id: Uuid, view_id: Uuid, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id,
            view_id,
            x,
            y,
            w,
            h,
        }
    }

    /// Copy of this cell under a new identifier, keeping view and geometry.
    #[must_use]
    pub fn duplicate(&self, id: Uuid) -> Self {
        Self { id, ..*self }
    }
}

/// Query language backing a cell query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// `InfluxQL` statement.
    #[default]
    Influxql,
    /// Flux script.
    Flux,
}

/// A query definition feeding a cell's visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CellQuery {
    /// Raw query text.
    pub text: String,
    /// Query language.
    #[serde(rename = "type", default)]
    pub kind: QueryKind,
    /// Data source the query runs against, when pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl CellQuery {
    /// Query with no pinned source.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: QueryKind) -> Self {
        Self {
            text: text.into(),
            kind,
            source_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_uses_camel_case_fields() {
        let cell = Cell::new(Uuid::nil(), Uuid::nil(), 0, 2, 4, 3);
        let value = serde_json::to_value(&cell).expect("serialize cell");
        assert!(value.get("viewId").is_some());
        assert_eq!(value["w"], 4);
        assert_eq!(value["y"], 2);
    }

    #[test]
    fn duplicate_keeps_view_and_geometry() {
        let original = Cell::new(Uuid::from_u128(1), Uuid::from_u128(9), 1, 2, 3, 4);
        let copy = original.duplicate(Uuid::from_u128(2));
        assert_eq!(copy.id, Uuid::from_u128(2));
        assert_eq!(copy.view_id, original.view_id);
        assert_eq!((copy.x, copy.y, copy.w, copy.h), (1, 2, 3, 4));
        assert_ne!(copy, original);
    }

    #[test]
    fn query_kind_defaults_and_source_is_optional() {
        let query: CellQuery =
            serde_json::from_value(json!({ "text": "SELECT mean(usage) FROM cpu" }))
                .expect("decode query");
        assert_eq!(query.kind, QueryKind::Influxql);
        assert!(query.source_id.is_none());

        let flux: CellQuery = serde_json::from_value(json!({
            "text": "from(bucket: \"telegraf\")",
            "type": "flux",
            "sourceId": "local"
        }))
        .expect("decode flux query");
        assert_eq!(flux.kind, QueryKind::Flux);
        assert_eq!(flux.source_id.as_deref(), Some("local"));
    }

    #[test]
    fn unpinned_query_omits_source_on_the_wire() {
        let value = serde_json::to_value(CellQuery::new("SHOW DATABASES", QueryKind::Influxql))
            .expect("serialize query");
        assert_eq!(value, json!({ "text": "SHOW DATABASES", "type": "influxql" }));
    }
}
