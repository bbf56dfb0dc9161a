//! Shared score pipeline models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FSCORE_SHEET, DEFAULT_ZSCORE_SHEET};

/// The score datasets published by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Solvency indicator (Altman Z-Score), one decimal per fiscal year.
    ZScore,
    /// Quality indicator (Piotroski F-Score): yearly scores, raw metrics and
    /// pass/fail criteria.
    FScore,
}

impl Dataset {
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::ZScore => "Z-Score",
            Dataset::FScore => "F-Score",
        }
    }

    pub fn default_sheet(&self) -> &'static str {
        match self {
            Dataset::ZScore => DEFAULT_ZSCORE_SHEET,
            Dataset::FScore => DEFAULT_FSCORE_SHEET,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened to one incoming record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    Updated,
    Failed,
}

/// Aggregate counts for one reconciliation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub inserted: usize,
    pub updated: usize,
    pub errors: usize,
}

impl ReconcileStats {
    pub fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted => self.inserted += 1,
            RecordOutcome::Updated => self.updated += 1,
            RecordOutcome::Failed => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.errors
    }
}

impl FromIterator<RecordOutcome> for ReconcileStats {
    fn from_iter<I: IntoIterator<Item = RecordOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut stats, outcome| {
            stats.record(outcome);
            stats
        })
    }
}

/// Result of one fetch, normalize and reconcile cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub dataset: Dataset,
    pub records_processed: usize,
    pub stats: ReconcileStats,
    pub timestamp: DateTime<Utc>,
}
