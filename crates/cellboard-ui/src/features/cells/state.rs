//! Dashboard cell list and pure transformations for testing outside wasm.

use std::rc::Rc;

use cellboard_models::{Cell, CellQuery, QueryKind};
use uuid::Uuid;

use crate::core::errors::UiError;

/// A cell as the dashboard grid renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardCell {
    /// Cell record handed to menu callbacks by reference.
    pub cell: Rc<Cell>,
    /// Display title.
    pub name: String,
    /// Queries backing the visualization.
    pub queries: Vec<CellQuery>,
    /// Whether the last query run returned rows.
    pub data_exists: bool,
}

fn position(cells: &[DashboardCell], id: Uuid) -> Result<usize, UiError> {
    cells
        .iter()
        .position(|entry| entry.cell.id == id)
        .ok_or(UiError::CellNotFound(id))
}

/// Insert a duplicate of cell `id` directly after it.
///
/// # Errors
/// Returns [`UiError::CellNotFound`] when `id` is not on the dashboard.
pub fn clone_cell(
    cells: &[DashboardCell],
    id: Uuid,
    new_id: Uuid,
) -> Result<Vec<DashboardCell>, UiError> {
    let index = position(cells, id)?;
    let source = &cells[index];
    let copy = DashboardCell {
        cell: Rc::new(source.cell.duplicate(new_id)),
        name: format!("{} (clone)", source.name),
        queries: source.queries.clone(),
        data_exists: source.data_exists,
    };
    let mut next = cells.to_vec();
    next.insert(index + 1, copy);
    Ok(next)
}

/// Drop cell `id` from the dashboard.
///
/// # Errors
/// Returns [`UiError::CellNotFound`] when `id` is not on the dashboard.
pub fn remove_cell(cells: &[DashboardCell], id: Uuid) -> Result<Vec<DashboardCell>, UiError> {
    let index = position(cells, id)?;
    let mut next = cells.to_vec();
    next.remove(index);
    Ok(next)
}

/// Seed cells for the demo dashboard.
#[must_use]
pub fn demo_cells() -> Vec<DashboardCell> {
    vec![
        DashboardCell {
            cell: Rc::new(Cell::new(
                Uuid::from_u128(0x01),
                Uuid::from_u128(0x101),
                0,
                0,
                6,
                4,
            )),
            name: "CPU usage".into(),
            queries: vec![CellQuery::new(
                "SELECT mean(usage_user) FROM cpu WHERE time > now() - 1h GROUP BY time(1m)",
                QueryKind::Influxql,
            )],
            data_exists: true,
        },
        DashboardCell {
            cell: Rc::new(Cell::new(
                Uuid::from_u128(0x02),
                Uuid::from_u128(0x102),
                6,
                0,
                6,
                4,
            )),
            name: "Disk writes".into(),
            queries: vec![CellQuery::new(
                "from(bucket: \"telegraf\") |> range(start: -1h) |> filter(fn: (r) => r._measurement == \"diskio\")",
                QueryKind::Flux,
            )],
            data_exists: false,
        },
        DashboardCell {
            cell: Rc::new(Cell::new(
                Uuid::from_u128(0x03),
                Uuid::from_u128(0x103),
                0,
                4,
                12,
                2,
            )),
            name: "Notes".into(),
            queries: Vec::new(),
            data_exists: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_inserts_copy_after_source() {
        let cells = demo_cells();
        let source = cells[0].cell.id;
        let next = clone_cell(&cells, source, Uuid::from_u128(0xaa)).expect("clone");
        assert_eq!(next.len(), cells.len() + 1);
        assert_eq!(next[1].cell.id, Uuid::from_u128(0xaa));
        assert_eq!(next[1].cell.view_id, cells[0].cell.view_id);
        assert_eq!(next[1].name, "CPU usage (clone)");
        assert_eq!(next[1].queries, cells[0].queries);
        assert_eq!(next[2].cell.id, cells[1].cell.id);
        assert!(Rc::ptr_eq(&next[0].cell, &cells[0].cell));
    }

    #[test]
    fn remove_drops_only_the_target() {
        let cells = demo_cells();
        let next = remove_cell(&cells, cells[1].cell.id).expect("remove");
        let ids: Vec<_> = next.iter().map(|entry| entry.cell.id).collect();
        assert_eq!(ids, [cells[0].cell.id, cells[2].cell.id]);
    }

    #[test]
    fn unknown_cells_are_reported() {
        let cells = demo_cells();
        let missing = Uuid::from_u128(0xdead);
        assert_eq!(
            remove_cell(&cells, missing),
            Err(UiError::CellNotFound(missing))
        );
        assert_eq!(
            clone_cell(&cells, missing, Uuid::from_u128(1)),
            Err(UiError::CellNotFound(missing))
        );
    }

    #[test]
    fn demo_cells_cover_menu_shapes() {
        let cells = demo_cells();
        assert!(cells.iter().any(|c| !c.queries.is_empty() && c.data_exists));
        assert!(cells.iter().any(|c| !c.queries.is_empty() && !c.data_exists));
        assert!(cells.iter().any(|c| c.queries.is_empty()));
    }
}
