use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use finscore_core::errors::{DatabaseError, Error};
use finscore_core::scores::{reconcile, ReconcileStats, ReconcileStore, ScoreRepositoryTrait};
use finscore_core::fscores::{FScore, FScoreRecord};
use finscore_core::Result;
use log::error;

use super::model::{NewFScoreDB, FScoreDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::fscores;
use crate::session::SqliteReconcileSession;

pub struct FScoreRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl FScoreRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FScoreRepository { pool, writer }
    }
}

#[async_trait]
impl ScoreRepositoryTrait<FScoreRecord> for FScoreRepository {
    fn list(&self) -> Result<Vec<FScore>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = fscores::table
            .order(fscores::ticker.asc())
            .select(FScoreDB::as_select())
            .load::<FScoreDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(FScore::from).collect())
    }

    fn get_by_ticker(&self, ticker: &str) -> Result<Option<FScore>> {
        let mut conn = get_connection(&self.pool)?;
        let row = fscores::table
            .filter(fscores::ticker.eq(ticker))
            .select(FScoreDB::as_select())
            .first::<FScoreDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(FScore::from))
    }

    async fn reconcile(&self, records: Vec<FScoreRecord>) -> Result<ReconcileStats> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ReconcileStats> {
                let mut session = SqliteReconcileSession::new(conn);
                Ok(reconcile(&mut session, &records))
            })
            .await
            .map_err(|e| {
                error!("F-Score batch commit failed: {}", e);
                Error::Database(DatabaseError::TransactionFailed(e.to_string()))
            })
    }
}

impl ReconcileStore<FScore> for SqliteReconcileSession<'_> {
    fn find_by_ticker(&mut self, ticker: &str) -> Result<Option<FScore>> {
        let row = fscores::table
            .filter(fscores::ticker.eq(ticker))
            .select(FScoreDB::as_select())
            .first::<FScoreDB>(&mut *self.conn)
            .optional()
            .into_core()?;
        Ok(row.map(FScore::from))
    }

    fn insert(&mut self, entity: &FScore) -> Result<()> {
        let new_row = NewFScoreDB::from_entity(entity, Utc::now().naive_utc());
        diesel::insert_into(fscores::table)
            .values(&new_row)
            .execute(&mut *self.conn)
            .into_core()?;
        Ok(())
    }

    fn update(&mut self, entity: &FScore) -> Result<()> {
        let row = FScoreDB::from_entity(entity, Utc::now().naive_utc());
        diesel::update(fscores::table.find(row.id))
            .set(&row)
            .execute(&mut *self.conn)
            .into_core()?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use finscore_core::scores::{normalize_grid, SheetRecord};
    use finscore_sheets::SheetGrid;
    use tempfile::tempdir;

    async fn create_test_repository() -> (FScoreRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("nested").join("scores.db");
        let db_path_str = init(&db_path.to_string_lossy()).expect("Failed to init database");

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (FScoreRepository::new(Arc::clone(&pool), writer), temp_dir)
    }

    #[tokio::test]
    async fn test_insert_fills_defaults_for_absent_columns() {
        let (repo, _dir) = create_test_repository().await;
        let grid = SheetGrid::from_rows([
            vec!["Mã CK", "2024", "ROA", "ROA>0"],
            vec!["vnm", "8", "0,15", "1"],
        ]);

        let records: Vec<FScoreRecord> = normalize_grid(&grid);
        let stats = repo.reconcile(records).await.unwrap();

        assert_eq!(stats.inserted, 1);
        let vnm = repo.get_by_ticker("VNM").unwrap().unwrap();
        assert_eq!(vnm.score_2024, Some(8));
        assert_eq!(vnm.score_2023, None);
        assert_eq!(vnm.roa, Some(0.15));
        assert!(vnm.roa_positive);
        assert!(!vnm.cfo_positive);
        assert!(!vnm.no_new_shares);
    }

    #[tokio::test]
    async fn test_absent_criteria_survive_update() {
        let (repo, _dir) = create_test_repository().await;
        let first = FScoreRecord {
            score_2024: Some(Some(7)),
            roa_positive: Some(true),
            no_new_shares: Some(true),
            ..FScoreRecord::with_ticker("FPT".to_string())
        };
        repo.reconcile(vec![first]).await.unwrap();

        let second = FScoreRecord {
            score_2024: Some(None),
            roa_positive: Some(false),
            ..FScoreRecord::with_ticker("FPT".to_string())
        };
        let stats = repo.reconcile(vec![second]).await.unwrap();

        assert_eq!(stats.updated, 1);
        let fpt = repo.get_by_ticker("FPT").unwrap().unwrap();
        assert_eq!(fpt.score_2024, None);
        assert!(!fpt.roa_positive);
        assert!(fpt.no_new_shares);
    }

    #[tokio::test]
    async fn test_duplicate_ticker_in_one_batch() {
        let (repo, _dir) = create_test_repository().await;
        let batch = vec![
            FScoreRecord {
                score_2024: Some(Some(5)),
                ..FScoreRecord::with_ticker("HPG".to_string())
            },
            FScoreRecord {
                score_2023: Some(Some(6)),
                ..FScoreRecord::with_ticker("HPG".to_string())
            },
        ];

        let stats = repo.reconcile(batch).await.unwrap();

        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.updated, 1);
        let hpg = repo.get_by_ticker("HPG").unwrap().unwrap();
        assert_eq!(hpg.score_2024, Some(5));
        assert_eq!(hpg.score_2023, Some(6));
        assert_eq!(repo.list().unwrap().len(), 1);
    }
}
