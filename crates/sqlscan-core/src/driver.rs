mod rows;
pub use rows::{ExecResult, Row, Rows};

mod transaction;
pub use transaction::{IsolationLevel, TransactionOptions};

use crate::{async_trait, stmt::Value, Error, Result};

use std::fmt::Debug;

/// A connection to a relational database.
///
/// Every statement is passed through as-is; parameters are positional.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a statement and returns its result set.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Runs a statement and returns its first row.
    ///
    /// Fails with a record not found error when the statement returns no
    /// rows. Any further rows are discarded.
    async fn query_row(&mut self, sql: &str, params: &[Value]) -> Result<Row> {
        let mut rows = self.query(sql, params).await?;

        match rows.next().await {
            Some(row) => row,
            None => Err(Error::record_not_found("query returned no rows")),
        }
    }

    /// Runs a statement that returns no rows.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult>;

    /// Starts a transaction.
    async fn begin(&mut self, options: &TransactionOptions) -> Result<()>;

    /// Commits the current transaction.
    async fn commit(&mut self) -> Result<()>;

    /// Rolls back the current transaction.
    async fn rollback(&mut self) -> Result<()>;
}
