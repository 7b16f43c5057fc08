use crate::Result;

use sqlscan_core::{
    async_trait,
    driver::{ExecResult, Row, Rows},
    scan::{column_names, element_shape, locate},
    stmt::Value,
    Field,
};
use tracing::{debug, trace};

/// A context queries can be run against: a [`Db`](crate::Db) or an open
/// [`Transaction`](crate::Transaction).
///
/// `query`, `query_row` and `exec` pass statements through to the driver.
/// `get` and `select` scan results into records.
#[async_trait]
pub trait Executor: Send {
    /// Runs a statement and returns its result set.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Runs a statement and returns its first row, or a record not found
    /// error when there is none.
    async fn query_row(&mut self, sql: &str, params: &[Value]) -> Result<Row>;

    /// Runs a statement that returns no rows.
    async fn exec(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult>;

    /// Fills `dest` from the first row returned by `sql`.
    ///
    /// Columns are matched to fields by name, as in [`select`](Self::select).
    /// Fails with a record not found error when the query returns no rows
    /// and with a field not found error when a column maps to no field.
    async fn get<T: Field>(&mut self, dest: &mut T, sql: &str, params: &[Value]) -> Result<()>
    where
        Self: Sized,
    {
        // Rejects scalar and self-containing destinations before querying
        let expected = column_names::<T>()?;

        let row = self.query_row(sql, params).await?;
        let mut targets = locate(dest, row.columns())?;

        trace!(
            expected = expected.len(),
            columns = targets.len(),
            "scanning row"
        );
        row.scan(&mut targets)
    }

    /// Appends one element to `dest` per row returned by `sql`, in row
    /// order.
    ///
    /// Columns are matched to fields by name, so the statement may return
    /// them in any order. Scanning stops at the first error; elements
    /// appended before it stay in `dest`.
    async fn select<E: Field>(
        &mut self,
        dest: &mut Vec<E>,
        sql: &str,
        params: &[Value],
    ) -> Result<()>
    where
        Self: Sized,
    {
        let shape = element_shape::<E>()?;
        let mut rows = self.query(sql, params).await?;
        let columns = rows.columns().to_vec();

        debug!(record = shape.name, columns = columns.len(), "scanning rows");

        while let Some(row) = rows.next().await {
            let row = row?;
            let mut element = E::default();

            {
                let mut targets = locate(&mut element, &columns)?;
                row.scan(&mut targets)?;
            }

            trace!(record = shape.name, index = dest.len(), "scanned row");
            dest.push(element);
        }

        Ok(())
    }
}
