use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use finscore_sheets::GridSource;
use log::{debug, info, warn};

use super::normalizer::{normalize_grid, normalize_ticker};
use super::scores_model::RefreshSummary;
use super::scores_traits::{ScoreRepositoryTrait, ScoreServiceTrait, SheetRecord};
use crate::constants::MAX_TICKER_LEN;
use crate::errors::Result;

/// Fetch, normalize and reconcile cycle for one dataset.
pub struct ScoreService<R: SheetRecord> {
    repository: Arc<dyn ScoreRepositoryTrait<R>>,
    source: Arc<dyn GridSource>,
    sheet_name: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: SheetRecord> ScoreService<R> {
    pub fn new(
        repository: Arc<dyn ScoreRepositoryTrait<R>>,
        source: Arc<dyn GridSource>,
        sheet_name: impl Into<String>,
    ) -> Self {
        ScoreService {
            repository,
            source,
            sheet_name: sheet_name.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: SheetRecord> ScoreServiceTrait<R> for ScoreService<R> {
    async fn list_records(&self, refresh: bool) -> Result<Vec<R::Entity>> {
        if refresh {
            self.refresh().await?;
        }
        self.repository.list()
    }

    fn get_record(&self, ticker: &str) -> Result<Option<R::Entity>> {
        let ticker = normalize_ticker(ticker);
        if ticker.is_empty() || ticker.chars().count() > MAX_TICKER_LEN {
            return Ok(None);
        }
        self.repository.get_by_ticker(&ticker)
    }

    async fn refresh(&self) -> Result<RefreshSummary> {
        let label = R::DATASET.label();
        info!(
            "Refreshing {} data from sheet '{}' via {}",
            label,
            self.sheet_name,
            self.source.id()
        );

        let grid = self
            .source
            .fetch_grid(&self.sheet_name)
            .await
            .inspect_err(|e| {
                warn!(
                    "{} fetch failed (transient: {}): {}",
                    label,
                    e.is_transient(),
                    e
                )
            })?;
        debug!("{} sheet returned {} rows", label, grid.rows.len());

        let records: Vec<R> = normalize_grid(&grid);
        let records_processed = records.len();
        let stats = self.repository.reconcile(records).await?;

        Ok(RefreshSummary {
            dataset: R::DATASET,
            records_processed,
            stats,
            timestamp: Utc::now(),
        })
    }
}
