mod connect;

use crate::{
    transaction::{Transaction, TransactionBuilder},
    Executor, Result,
};

use sqlscan_core::{
    async_trait,
    driver::{Connection, ExecResult, Row, Rows, TransactionOptions},
    stmt::Value,
};
use tracing::debug;

/// A database handle wrapping one driver connection.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,

    /// Set when a transaction is dropped without commit or rollback. Drop
    /// cannot issue the asynchronous `ROLLBACK`, so the next operation does.
    pub(crate) rollback_pending: bool,
}

impl Db {
    /// Connects to the database named by `url`.
    ///
    /// Supported schemes are `postgresql` (feature `postgresql`) and `sqlite`
    /// (feature `sqlite`), e.g. `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Db> {
        let connection = connect::connect(url).await?;
        Ok(Db::from_boxed(connection))
    }

    /// Wraps an already established driver connection.
    pub fn new(connection: impl Connection) -> Db {
        Db::from_boxed(Box::new(connection))
    }

    fn from_boxed(connection: Box<dyn Connection>) -> Db {
        Db {
            connection,
            rollback_pending: false,
        }
    }

    /// Starts a transaction with default options.
    pub async fn begin(&mut self) -> Result<Transaction<'_>> {
        Transaction::begin_with(self, TransactionOptions::default()).await
    }

    /// Starts a transaction with the given options.
    pub async fn begin_with(&mut self, options: TransactionOptions) -> Result<Transaction<'_>> {
        Transaction::begin_with(self, options).await
    }

    /// Returns a builder for configuring a transaction before starting it.
    pub fn transaction(&mut self) -> TransactionBuilder<'_> {
        TransactionBuilder::new(self)
    }

    /// The driver connection, after rolling back any dropped transaction.
    pub(crate) async fn connection(&mut self) -> Result<&mut dyn Connection> {
        if self.rollback_pending {
            self.rollback_pending = false;
            debug!("rolling back dropped transaction");
            self.connection.rollback().await?;
        }

        Ok(&mut *self.connection)
    }
}

#[async_trait]
impl Executor for Db {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        debug!(sql, params = params.len(), "query");
        self.connection().await?.query(sql, params).await
    }

    async fn query_row(&mut self, sql: &str, params: &[Value]) -> Result<Row> {
        debug!(sql, params = params.len(), "query_row");
        self.connection().await?.query_row(sql, params).await
    }

    async fn exec(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        debug!(sql, params = params.len(), "exec");
        self.connection().await?.execute(sql, params).await
    }
}
