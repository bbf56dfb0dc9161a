/// Default sheet holding the solvency (Altman Z-Score) table
pub const DEFAULT_ZSCORE_SHEET: &str = "Zscore";

/// Default sheet holding the quality (Piotroski F-Score) table
pub const DEFAULT_FSCORE_SHEET: &str = "FScore";

/// Longest ticker accepted by the store
pub const MAX_TICKER_LEN: usize = 10;

/// Column index holding the ticker in every data row
pub const TICKER_COLUMN: usize = 0;

/// Data rows with fewer cells than this are skipped
pub const MIN_ROW_CELLS: usize = 2;
