//! Grid to typed records.

use finscore_sheets::SheetGrid;
use log::{debug, info, warn};

use super::columns::{ColumnMapping, HeaderIndex};
use super::scores_traits::SheetRecord;
use crate::constants::{MIN_ROW_CELLS, TICKER_COLUMN};

/// Canonical form of a ticker cell: trimmed and upper-cased.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Converts a sheet grid into records, in row order.
///
/// Row 0 is the header. A data row yields a record when it has at least two
/// cells and a non-blank ticker in column 0. A field is set only when its
/// header exists and the row reaches that column; otherwise it stays absent.
/// Bad cells never fail the grid.
pub fn normalize_grid<R: SheetRecord>(grid: &SheetGrid) -> Vec<R> {
    let label = R::DATASET.label();

    let header = match grid.header() {
        Some(header) if !grid.data_rows().is_empty() => header,
        _ => {
            warn!("No data found in {} sheet response", label);
            return Vec::new();
        }
    };

    let index = HeaderIndex::from_header(header);
    let bound: Vec<(&ColumnMapping<R>, usize)> = R::columns()
        .iter()
        .filter_map(|column| index.position(column.header).map(|pos| (column, pos)))
        .collect();

    if bound.len() < R::columns().len() {
        let missing: Vec<&str> = R::columns()
            .iter()
            .filter(|column| index.position(column.header).is_none())
            .map(|column| column.header)
            .collect();
        debug!("{} sheet is missing columns: {:?}", label, missing);
    }

    let records: Vec<R> = grid
        .data_rows()
        .iter()
        .filter_map(|row| normalize_row(row, &bound))
        .collect();

    info!("Processed {} {} records from sheet", records.len(), label);
    records
}

fn normalize_row<R: SheetRecord>(row: &[String], bound: &[(&ColumnMapping<R>, usize)]) -> Option<R> {
    if row.len() < MIN_ROW_CELLS {
        return None;
    }

    let ticker = normalize_ticker(&row[TICKER_COLUMN]);
    if ticker.is_empty() {
        return None;
    }

    let mut record = R::with_ticker(ticker);
    for (column, pos) in bound {
        if let Some(cell) = row.get(*pos) {
            column.assign(&mut record, cell);
        }
    }
    Some(record)
}
