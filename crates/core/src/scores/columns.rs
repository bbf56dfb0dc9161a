//! Header-to-field tables.
//!
//! Each dataset declares a static slice of [`ColumnMapping`]s naming the sheet
//! header, the canonical field it feeds, and how the cell is coerced. The
//! tables are plain data so they can be checked without touching the network.

use std::collections::HashMap;

use super::cell_values::{parse_boolean, parse_integer, parse_numeric};
use crate::constants::TICKER_COLUMN;

/// Where a coerced cell lands in a record, and how it is coerced.
///
/// Nullable slots are `Option<Option<_>>`: the outer `None` means the column
/// was never seen for this row, `Some(None)` means it was seen but blank or
/// unparsable.
pub enum FieldSlot<R> {
    Numeric(fn(&mut R) -> &mut Option<Option<f64>>),
    Integer(fn(&mut R) -> &mut Option<Option<i32>>),
    Flag(fn(&mut R) -> &mut Option<bool>),
}

pub struct ColumnMapping<R> {
    pub header: &'static str,
    pub field: &'static str,
    pub slot: FieldSlot<R>,
}

impl<R> ColumnMapping<R> {
    /// Coerces `cell` and stores it in the mapped field of `record`.
    pub fn assign(&self, record: &mut R, cell: &str) {
        match self.slot {
            FieldSlot::Numeric(field) => *field(record) = Some(parse_numeric(cell)),
            FieldSlot::Integer(field) => *field(record) = Some(parse_integer(cell)),
            FieldSlot::Flag(field) => *field(record) = Some(parse_boolean(cell)),
        }
    }
}

/// Column positions by header name, built from the header row.
///
/// Column 0 always holds the ticker and is never mapped to a field. When a
/// header repeats, the right-most column wins.
#[derive(Debug, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_header(header: &[String]) -> Self {
        let positions = header
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != TICKER_COLUMN)
            .map(|(idx, name)| (name.trim().to_string(), idx))
            .collect();
        Self { positions }
    }

    pub fn position(&self, header: &str) -> Option<usize> {
        self.positions.get(header).copied()
    }
}
