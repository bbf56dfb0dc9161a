//! Grid sources.

mod google;
mod traits;

pub use google::{GoogleSheetsClient, SheetsConfig};
pub use traits::GridSource;
