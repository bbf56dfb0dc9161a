//! Shared sheet-to-store pipeline used by every score dataset.
//!
//! - [`cell_values`]: coercion of raw cell strings into typed values
//! - [`columns`]: static header-to-field tables and the header index
//! - [`normalizer`]: grid to typed records
//! - [`reconciler`]: insert / sparse-merge / isolate-failure per record

pub mod cell_values;
pub mod columns;
pub mod normalizer;
pub mod reconciler;
mod scores_model;
mod scores_service;
mod scores_traits;

pub use cell_values::{parse_boolean, parse_integer, parse_numeric};
pub use columns::{ColumnMapping, FieldSlot, HeaderIndex};
pub use normalizer::{normalize_grid, normalize_ticker};
pub use reconciler::{reconcile, reconcile_record};
pub use scores_model::{Dataset, ReconcileStats, RecordOutcome, RefreshSummary};
pub use scores_service::ScoreService;
pub use scores_traits::{
    merge_field, ReconcileStore, RecordScope, ScoreEntity, ScoreRepositoryTrait,
    ScoreServiceTrait, SheetRecord,
};
