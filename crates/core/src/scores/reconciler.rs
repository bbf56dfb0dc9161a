//! Insert-or-merge reconciliation of normalized records against the store.
//!
//! Every record runs inside its own [`RecordScope`]: a failure rolls back
//! that record alone, is counted, and the batch moves on. Committing the
//! batch is the caller's job.

use log::{error, info};

use super::scores_model::{ReconcileStats, RecordOutcome};
use super::scores_traits::{ReconcileStore, SheetRecord};
use crate::errors::Result;

/// Reconciles `records` in order and returns the aggregate counts.
pub fn reconcile<R, S>(store: &mut S, records: &[R]) -> ReconcileStats
where
    R: SheetRecord,
    S: ReconcileStore<R::Entity>,
{
    let stats: ReconcileStats = records
        .iter()
        .map(|record| reconcile_record(store, record))
        .collect();

    info!(
        "{} reconciliation complete: inserted={}, updated={}, errors={}",
        R::DATASET.label(),
        stats.inserted,
        stats.updated,
        stats.errors
    );
    stats
}

/// Applies one record inside its own scope. Never fails; errors become
/// [`RecordOutcome::Failed`].
pub fn reconcile_record<R, S>(store: &mut S, record: &R) -> RecordOutcome
where
    R: SheetRecord,
    S: ReconcileStore<R::Entity>,
{
    let label = R::DATASET.label();
    let ticker = record.ticker();

    if let Err(e) = store.begin_record() {
        error!("Could not open scope for {} ticker {}: {}", label, ticker, e);
        return RecordOutcome::Failed;
    }

    let applied = apply_record(store, record).and_then(|outcome| {
        store.commit_record()?;
        Ok(outcome)
    });

    match applied {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Error processing {} record {}: {}", label, ticker, e);
            if let Err(rollback_err) = store.rollback_record() {
                error!(
                    "Rollback failed for {} ticker {}: {}",
                    label, ticker, rollback_err
                );
            }
            RecordOutcome::Failed
        }
    }
}

fn apply_record<R, S>(store: &mut S, record: &R) -> Result<RecordOutcome>
where
    R: SheetRecord,
    S: ReconcileStore<R::Entity>,
{
    match store.find_by_ticker(record.ticker())? {
        Some(existing) => {
            let mut merged = existing.clone();
            record.merge_into(&mut merged);
            if merged != existing {
                store.update(&merged)?;
            }
            Ok(RecordOutcome::Updated)
        }
        None => {
            store.insert(&record.to_entity())?;
            Ok(RecordOutcome::Inserted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Error};
    use crate::scores::{RecordScope, ScoreEntity};
    use crate::zscores::{ZScore, ZScoreRecord};
    use std::collections::{BTreeMap, HashSet};

    /// In-memory store with savepoint semantics and failure injection.
    #[derive(Default)]
    struct MockStore {
        rows: BTreeMap<String, ZScore>,
        snapshots: Vec<BTreeMap<String, ZScore>>,
        next_id: i32,
        fail_writes: HashSet<String>,
        fail_lookups: HashSet<String>,
        writes: usize,
        commits: usize,
        rollbacks: usize,
    }

    impl MockStore {
        fn failing_writes(tickers: &[&str]) -> Self {
            Self {
                fail_writes: tickers.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            }
        }

        fn check(&self, ticker: &str) -> Result<()> {
            if self.fail_writes.contains(ticker) {
                return Err(Error::Database(DatabaseError::CheckViolation(format!(
                    "rejected {}",
                    ticker
                ))));
            }
            Ok(())
        }
    }

    impl RecordScope for MockStore {
        fn begin_record(&mut self) -> Result<()> {
            self.snapshots.push(self.rows.clone());
            Ok(())
        }

        fn commit_record(&mut self) -> Result<()> {
            self.snapshots.pop();
            self.commits += 1;
            Ok(())
        }

        fn rollback_record(&mut self) -> Result<()> {
            if let Some(snapshot) = self.snapshots.pop() {
                self.rows = snapshot;
            }
            self.rollbacks += 1;
            Ok(())
        }
    }

    impl ReconcileStore<ZScore> for MockStore {
        fn find_by_ticker(&mut self, ticker: &str) -> Result<Option<ZScore>> {
            if self.fail_lookups.contains(ticker) {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "lookup failed".to_string(),
                )));
            }
            Ok(self.rows.get(ticker).cloned())
        }

        fn insert(&mut self, entity: &ZScore) -> Result<()> {
            // Row lands before the check so rollback has something to undo.
            self.next_id += 1;
            let mut row = entity.clone();
            row.id = self.next_id;
            self.rows.insert(row.ticker.clone(), row);
            self.check(&entity.ticker)?;
            self.writes += 1;
            Ok(())
        }

        fn update(&mut self, entity: &ZScore) -> Result<()> {
            self.check(&entity.ticker)?;
            self.rows.insert(entity.ticker.clone(), entity.clone());
            self.writes += 1;
            Ok(())
        }
    }

    fn record(ticker: &str, y2024: Option<Option<f64>>, y2023: Option<Option<f64>>) -> ZScoreRecord {
        ZScoreRecord {
            year_2024: y2024,
            year_2023: y2023,
            ..ZScoreRecord::with_ticker(ticker.to_string())
        }
    }

    #[test]
    fn test_new_ticker_is_inserted_with_defaults() {
        let mut store = MockStore::default();
        let stats = reconcile(&mut store, &[record("AAA", Some(Some(3.5)), None)]);

        assert_eq!(
            stats,
            ReconcileStats {
                inserted: 1,
                updated: 0,
                errors: 0
            }
        );
        let row = &store.rows["AAA"];
        assert_eq!(row.year_2024, Some(3.5));
        assert_eq!(row.year_2023, None);
        assert_eq!(row.year_2020, None);
    }

    #[test]
    fn test_sparse_record_only_touches_present_fields() {
        let mut store = MockStore::default();
        let full = ZScoreRecord {
            year_2024: Some(Some(1.0)),
            year_2023: Some(Some(2.0)),
            year_2022: Some(Some(3.0)),
            year_2021: Some(Some(4.0)),
            year_2020: Some(Some(5.0)),
            ..ZScoreRecord::with_ticker("AAA".to_string())
        };
        reconcile(&mut store, &[full]);

        let sparse = record("AAA", None, Some(Some(9.0)));
        let stats = reconcile(&mut store, &[sparse]);

        assert_eq!(stats.updated, 1);
        assert_eq!(stats.inserted, 0);
        let row = &store.rows["AAA"];
        assert_eq!(row.year_2024, Some(1.0));
        assert_eq!(row.year_2023, Some(9.0));
        assert_eq!(row.year_2022, Some(3.0));
        assert_eq!(row.year_2021, Some(4.0));
        assert_eq!(row.year_2020, Some(5.0));
    }

    #[test]
    fn test_present_blank_cell_clears_field() {
        let mut store = MockStore::default();
        reconcile(&mut store, &[record("AAA", Some(Some(1.0)), Some(Some(2.0)))]);
        reconcile(&mut store, &[record("AAA", Some(None), None)]);

        let row = &store.rows["AAA"];
        assert_eq!(row.year_2024, None);
        assert_eq!(row.year_2023, Some(2.0));
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let mut store = MockStore::failing_writes(&["BAD1", "BAD2"]);
        let records = vec![
            record("AAA", Some(Some(1.0)), None),
            record("BAD1", Some(Some(2.0)), None),
            record("BBB", Some(Some(3.0)), None),
            record("BAD2", Some(Some(4.0)), None),
            record("CCC", Some(Some(5.0)), None),
        ];

        let stats = reconcile(&mut store, &records);

        assert_eq!(stats.inserted, 3);
        assert_eq!(stats.errors, 2);
        assert_eq!(stats.total(), records.len());
        assert_eq!(store.rollbacks, 2);
        assert!(store.rows.contains_key("CCC"));
        // Rolled back inserts leave no trace.
        assert!(!store.rows.contains_key("BAD1"));
        assert!(!store.rows.contains_key("BAD2"));
    }

    #[test]
    fn test_lookup_failure_is_counted() {
        let mut store = MockStore::default();
        store.fail_lookups.insert("AAA".to_string());

        let stats = reconcile(
            &mut store,
            &[record("AAA", Some(Some(1.0)), None), record("BBB", None, None)],
        );

        assert_eq!(stats.errors, 1);
        assert_eq!(stats.inserted, 1);
    }

    #[test]
    fn test_rerun_reports_updates_only_and_skips_unchanged_writes() {
        let mut store = MockStore::default();
        let records = vec![
            record("AAA", Some(Some(1.0)), Some(Some(2.0))),
            record("BBB", Some(None), Some(Some(3.0))),
        ];

        let first = reconcile(&mut store, &records);
        let after_first = store.rows.clone();
        let writes_after_first = store.writes;

        let second = reconcile(&mut store, &records);

        assert_eq!(first.inserted, 2);
        assert_eq!(second.inserted, 0);
        assert_eq!(second.updated, 2);
        assert_eq!(store.rows, after_first);
        assert_eq!(store.writes, writes_after_first);
    }

    #[test]
    fn test_duplicate_ticker_in_batch_inserts_then_updates() {
        let mut store = MockStore::default();
        let stats = reconcile(
            &mut store,
            &[
                record("AAA", Some(Some(1.0)), None),
                record("AAA", None, Some(Some(2.0))),
            ],
        );

        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.updated, 1);
        let row = &store.rows["AAA"];
        assert_eq!(row.year_2024, Some(1.0));
        assert_eq!(row.year_2023, Some(2.0));
    }

    #[test]
    fn test_every_record_gets_its_own_scope() {
        let mut store = MockStore::default();
        reconcile(
            &mut store,
            &[record("AAA", None, None), record("BBB", None, None)],
        );
        assert_eq!(store.commits, 2);
        assert!(store.snapshots.is_empty());
    }

    #[test]
    fn test_to_entity_matches_blank_plus_merge() {
        let rec = record("AAA", Some(Some(1.5)), Some(None));
        let mut expected = ZScore::blank("AAA");
        rec.merge_into(&mut expected);
        assert_eq!(rec.to_entity(), expected);
    }
}
