//! Z-Score (solvency) dataset: one decimal per fiscal year.

mod zscores_model;

pub use zscores_model::{ZScore, ZScoreRecord, ZSCORE_COLUMNS};
