//! F-Score (quality) dataset: yearly scores, the raw metrics behind the
//! latest score, and the nine pass/fail criteria.

mod fscores_model;

pub use fscores_model::{FScore, FScoreRecord, FSCORE_COLUMNS};
