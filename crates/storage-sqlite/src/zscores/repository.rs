use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use finscore_core::errors::{DatabaseError, Error};
use finscore_core::scores::{reconcile, ReconcileStats, ReconcileStore, ScoreRepositoryTrait};
use finscore_core::zscores::{ZScore, ZScoreRecord};
use finscore_core::Result;
use log::error;

use super::model::{NewZScoreDB, ZScoreDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::zscores;
use crate::session::SqliteReconcileSession;

pub struct ZScoreRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ZScoreRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ZScoreRepository { pool, writer }
    }
}

#[async_trait]
impl ScoreRepositoryTrait<ZScoreRecord> for ZScoreRepository {
    fn list(&self) -> Result<Vec<ZScore>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = zscores::table
            .order(zscores::ticker.asc())
            .select(ZScoreDB::as_select())
            .load::<ZScoreDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(ZScore::from).collect())
    }

    fn get_by_ticker(&self, ticker: &str) -> Result<Option<ZScore>> {
        let mut conn = get_connection(&self.pool)?;
        let row = zscores::table
            .filter(zscores::ticker.eq(ticker))
            .select(ZScoreDB::as_select())
            .first::<ZScoreDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(ZScore::from))
    }

    async fn reconcile(&self, records: Vec<ZScoreRecord>) -> Result<ReconcileStats> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ReconcileStats> {
                let mut session = SqliteReconcileSession::new(conn);
                Ok(reconcile(&mut session, &records))
            })
            .await
            .map_err(|e| {
                error!("Z-Score batch commit failed: {}", e);
                Error::Database(DatabaseError::TransactionFailed(e.to_string()))
            })
    }
}

impl ReconcileStore<ZScore> for SqliteReconcileSession<'_> {
    fn find_by_ticker(&mut self, ticker: &str) -> Result<Option<ZScore>> {
        let row = zscores::table
            .filter(zscores::ticker.eq(ticker))
            .select(ZScoreDB::as_select())
            .first::<ZScoreDB>(&mut *self.conn)
            .optional()
            .into_core()?;
        Ok(row.map(ZScore::from))
    }

    fn insert(&mut self, entity: &ZScore) -> Result<()> {
        let new_row = NewZScoreDB::from_entity(entity, Utc::now().naive_utc());
        diesel::insert_into(zscores::table)
            .values(&new_row)
            .execute(&mut *self.conn)
            .into_core()?;
        Ok(())
    }

    fn update(&mut self, entity: &ZScore) -> Result<()> {
        let row = ZScoreDB::from_entity(entity, Utc::now().naive_utc());
        diesel::update(zscores::table.find(row.id))
            .set(&row)
            .execute(&mut *self.conn)
            .into_core()?;
        Ok(())
    }
}
