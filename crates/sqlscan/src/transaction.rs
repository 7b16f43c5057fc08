use crate::{Db, Executor, Result};

use sqlscan_core::{
    async_trait,
    driver::{ExecResult, IsolationLevel, Row, Rows, TransactionOptions},
    stmt::Value,
};
use tracing::{debug, warn};

/// Builder for configuring a transaction before starting it.
#[derive(Debug)]
pub struct TransactionBuilder<'db> {
    db: &'db mut Db,
    options: TransactionOptions,
}

impl<'db> TransactionBuilder<'db> {
    pub(crate) fn new(db: &'db mut Db) -> Self {
        TransactionBuilder {
            db,
            options: TransactionOptions::default(),
        }
    }

    /// Set the isolation level for this transaction.
    pub fn isolation(mut self, level: IsolationLevel) -> Self {
        self.options = self.options.isolation(level);
        self
    }

    /// Set whether this transaction is read-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.options = self.options.read_only(read_only);
        self
    }

    /// Begin the transaction with the configured options.
    pub async fn begin(self) -> Result<Transaction<'db>> {
        Transaction::begin_with(self.db, self.options).await
    }
}

/// An open database transaction.
///
/// Borrows `&mut Db` for its lifetime, preventing use of the same `Db`
/// outside the transaction while it is open.
///
/// If dropped without calling [`commit`](Self::commit) or
/// [`rollback`](Self::rollback), the transaction is rolled back before the
/// `Db` runs its next statement.
#[derive(Debug)]
pub struct Transaction<'db> {
    db: &'db mut Db,

    /// Whether commit or rollback has been called.
    done: bool,
}

impl<'db> Transaction<'db> {
    pub(crate) async fn begin_with(
        db: &'db mut Db,
        options: TransactionOptions,
    ) -> Result<Transaction<'db>> {
        debug!(?options, "begin transaction");
        db.connection().await?.begin(&options).await?;

        Ok(Transaction { db, done: false })
    }

    /// Commit the transaction.
    pub async fn commit(mut self) -> Result<()> {
        self.done = true;
        debug!("commit transaction");
        self.db.connection().await?.commit().await
    }

    /// Roll back the transaction.
    pub async fn rollback(mut self) -> Result<()> {
        self.done = true;
        debug!("rollback transaction");
        self.db.connection().await?.rollback().await
    }
}

#[async_trait]
impl Executor for Transaction<'_> {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.db.query(sql, params).await
    }

    async fn query_row(&mut self, sql: &str, params: &[Value]) -> Result<Row> {
        self.db.query_row(sql, params).await
    }

    async fn exec(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        self.db.exec(sql, params).await
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.done {
            warn!("transaction dropped without commit or rollback");
            self.db.rollback_pending = true;
        }
    }
}
