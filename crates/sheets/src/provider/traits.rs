use async_trait::async_trait;

use crate::errors::SheetsError;
use crate::models::SheetGrid;

/// A remote source of spreadsheet grids.
///
/// Implementations perform a single request per call and never retry.
#[async_trait]
pub trait GridSource: Send + Sync {
    /// Short identifier used in logs, e.g. `"GOOGLE_SHEETS"`.
    fn id(&self) -> &'static str;

    /// Fetch the full grid of the named sheet.
    async fn fetch_grid(&self, sheet_name: &str) -> Result<SheetGrid, SheetsError>;
}
