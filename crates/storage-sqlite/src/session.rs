//! Per-record savepoints inside the writer's batch transaction.

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::SqliteConnection;
use finscore_core::scores::RecordScope;
use finscore_core::Result;

use crate::errors::IntoCore;

/// A reconciliation pass over one writer connection.
///
/// Must be used inside an open transaction (the writer actor provides one);
/// each record scope then becomes a `SAVEPOINT` so a failed record is rolled
/// back alone while earlier records stay part of the batch.
pub struct SqliteReconcileSession<'c> {
    pub(crate) conn: &'c mut SqliteConnection,
}

impl<'c> SqliteReconcileSession<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        SqliteReconcileSession { conn }
    }
}

impl RecordScope for SqliteReconcileSession<'_> {
    fn begin_record(&mut self) -> Result<()> {
        AnsiTransactionManager::begin_transaction(&mut *self.conn).into_core()
    }

    fn commit_record(&mut self) -> Result<()> {
        AnsiTransactionManager::commit_transaction(&mut *self.conn).into_core()
    }

    fn rollback_record(&mut self) -> Result<()> {
        AnsiTransactionManager::rollback_transaction(&mut *self.conn).into_core()
    }
}
