//! Finscore Core - sheet normalization, reconciliation and score services.
//!
//! This crate turns raw spreadsheet grids into typed, ticker-keyed records
//! and reconciles them against persisted state. It is database-agnostic:
//! persistence is reached through the traits in [`scores`], implemented by
//! the `storage-sqlite` crate.
//!
//! ```text
//! GridSource ──> normalize_grid ──> reconcile ──> ScoreRepositoryTrait
//!  (sheets)        (scores)          (scores)       (storage-sqlite)
//! ```

pub mod constants;
pub mod errors;
pub mod fscores;
pub mod scores;
pub mod zscores;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
