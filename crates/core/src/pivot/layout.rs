//! Pivot matrix layout.

use std::collections::BTreeSet;

use crate::catalog::DimensionId;

use super::types::{AggregatedCell, CellValues, PivotMatrix};

/// Lays out aggregated cells as a row-major matrix.
///
/// Headers are the distinct row and column keys actually present in
/// the cells, sorted by their typed values (months chronologically,
/// years numerically, text lexically), never the theoretical
/// cross-product of all possible dimension values. A (row, column)
/// pair with no contributing facts renders as `None` ("no data"),
/// distinct from a zero value.
///
/// With both axes empty the result is a single total cell with no
/// headers; with no cells at all, empty headers and an empty matrix.
/// Deterministic for the same cells and dimension order; re-ordering
/// axes is the caller's signal to rebuild.
#[must_use]
pub fn build_matrix(
    cells: &[AggregatedCell],
    row_dimensions: &[DimensionId],
    column_dimensions: &[DimensionId],
) -> PivotMatrix {
    if cells.is_empty() {
        return PivotMatrix::default();
    }

    if row_dimensions.is_empty() && column_dimensions.is_empty() {
        // Portfolio-wide total: exactly one cell under the implicit keys.
        let total = cells
            .iter()
            .find(|cell| cell.row_key.is_total() && cell.column_key.is_total());
        return PivotMatrix {
            row_headers: Vec::new(),
            column_headers: Vec::new(),
            matrix: vec![vec![total.map(cell_values)]],
        };
    }

    let row_headers: Vec<_> = cells
        .iter()
        .map(|cell| cell.row_key.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let column_headers: Vec<_> = cells
        .iter()
        .map(|cell| cell.column_key.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut matrix = vec![vec![None; column_headers.len()]; row_headers.len()];
    for cell in cells {
        // Both searches succeed: headers are drawn from these cells.
        if let (Ok(row), Ok(column)) = (
            row_headers.binary_search(&cell.row_key),
            column_headers.binary_search(&cell.column_key),
        ) {
            matrix[row][column] = Some(cell_values(cell));
        }
    }

    PivotMatrix {
        row_headers,
        column_headers,
        matrix,
    }
}

fn cell_values(cell: &AggregatedCell) -> CellValues {
    CellValues {
        metrics: cell.metrics.clone(),
        source_count: cell.source_count,
    }
}
