//! Spreadsheet grid source.
//!
//! This crate retrieves raw two-dimensional grids (a header row followed by
//! data rows) from a spreadsheet-backed source. It knows nothing about the
//! meaning of the cells; turning grids into typed records is the job of
//! `finscore-core`.
//!
//! ```text
//! +------------------+      GET values/{sheet}      +------------------+
//! |   GridSource     | ---------------------------> |  Google Sheets   |
//! +------------------+                              +------------------+
//!          |
//!          v
//! +------------------+
//! |    SheetGrid     |  (header row + data rows, all cells as strings)
//! +------------------+
//! ```
//!
//! One call performs exactly one request with a fixed timeout. Retry policy,
//! if any, belongs to the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::SheetsError;
pub use models::SheetGrid;
pub use provider::{GoogleSheetsClient, GridSource, SheetsConfig};
