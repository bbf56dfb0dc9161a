use async_trait::async_trait;

use super::columns::ColumnMapping;
use super::scores_model::{Dataset, ReconcileStats, RefreshSummary};
use crate::errors::Result;

/// A persisted, ticker-keyed row.
pub trait ScoreEntity: Clone + PartialEq + Send + Sync + 'static {
    /// An unsaved row for `ticker` with every value at its declared default.
    fn blank(ticker: &str) -> Self;

    fn ticker(&self) -> &str;
}

/// A typed row produced from a sheet, possibly carrying only some fields.
pub trait SheetRecord: Clone + Send + Sync + 'static {
    type Entity: ScoreEntity;

    const DATASET: Dataset;

    /// Header-to-field table for this dataset.
    fn columns() -> &'static [ColumnMapping<Self>];

    /// A record carrying only its ticker.
    fn with_ticker(ticker: String) -> Self;

    fn ticker(&self) -> &str;

    /// Overwrites every field present in `self` onto `entity`, leaving the
    /// ticker and every absent field untouched.
    fn merge_into(&self, entity: &mut Self::Entity);

    /// A new entity: declared defaults overlaid with this record.
    fn to_entity(&self) -> Self::Entity {
        let mut entity = Self::Entity::blank(self.ticker());
        self.merge_into(&mut entity);
        entity
    }
}

/// Copies `incoming` into `target` when the field was present in the sheet.
pub fn merge_field<T: Clone>(target: &mut T, incoming: &Option<T>) {
    if let Some(value) = incoming {
        *target = value.clone();
    }
}

/// Per-record isolation inside a surrounding batch transaction.
///
/// A record's writes become part of the batch only after `commit_record`;
/// `rollback_record` discards them without touching earlier records.
pub trait RecordScope {
    fn begin_record(&mut self) -> Result<()>;
    fn commit_record(&mut self) -> Result<()>;
    fn rollback_record(&mut self) -> Result<()>;
}

/// Key lookup and writes used by the reconciler.
pub trait ReconcileStore<E: ScoreEntity>: RecordScope {
    fn find_by_ticker(&mut self, ticker: &str) -> Result<Option<E>>;

    /// Persists a new row. The store stamps the modification time.
    fn insert(&mut self, entity: &E) -> Result<()>;

    /// Overwrites an existing row in place. The store stamps the modification time.
    fn update(&mut self, entity: &E) -> Result<()>;
}

/// Trait for score repository operations
#[async_trait]
pub trait ScoreRepositoryTrait<R: SheetRecord>: Send + Sync {
    /// All persisted rows ordered by ticker.
    fn list(&self) -> Result<Vec<R::Entity>>;

    fn get_by_ticker(&self, ticker: &str) -> Result<Option<R::Entity>>;

    /// Reconciles `records` in one batch transaction.
    ///
    /// Per-record failures are counted in the returned stats. An error is
    /// returned only when the batch itself cannot be committed.
    async fn reconcile(&self, records: Vec<R>) -> Result<ReconcileStats>;
}

/// Trait for score service operations
#[async_trait]
pub trait ScoreServiceTrait<R: SheetRecord>: Send + Sync {
    /// Lists persisted rows, refreshing from the sheet first when asked.
    async fn list_records(&self, refresh: bool) -> Result<Vec<R::Entity>>;

    fn get_record(&self, ticker: &str) -> Result<Option<R::Entity>>;

    /// Runs one fetch, normalize and reconcile cycle.
    async fn refresh(&self) -> Result<RefreshSummary>;
}
