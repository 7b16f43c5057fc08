use crate::{
    scan::Targets,
    stmt::{Value, ValueRecord},
    Result,
};

use std::{fmt, pin::Pin, sync::Arc};
use tokio_stream::{Stream, StreamExt};

type DynStream = Pin<Box<dyn Stream<Item = Result<ValueRecord>> + Send + 'static>>;

/// A result set: the column names, in result order, and a forward-only
/// cursor over the rows.
///
/// Dropping a `Rows` releases the underlying cursor.
pub struct Rows {
    columns: Arc<[String]>,
    stream: DynStream,
}

/// One row of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: ValueRecord,
}

/// Outcome of a statement that returns no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Number of rows inserted, updated, or deleted
    pub rows_affected: u64,
}

impl Rows {
    pub fn from_vec(columns: Vec<String>, records: Vec<ValueRecord>) -> Rows {
        Rows::from_stream(columns, tokio_stream::iter(records.into_iter().map(Ok)))
    }

    pub fn from_stream<T>(columns: Vec<String>, stream: T) -> Rows
    where
        T: Stream<Item = Result<ValueRecord>> + Send + 'static,
    {
        Rows {
            columns: columns.into(),
            stream: Box::pin(stream),
        }
    }

    /// Column names in result order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the next row, or the error the cursor hit while fetching it.
    pub async fn next(&mut self) -> Option<Result<Row>> {
        let record = self.stream.next().await?;

        Some(record.map(|values| Row {
            columns: self.columns.clone(),
            values,
        }))
    }

    /// The remaining records, without column names.
    pub fn into_stream(self) -> impl Stream<Item = Result<ValueRecord>> + Send + 'static {
        self.stream
    }

    pub async fn collect(mut self) -> Result<Vec<Row>> {
        let mut ret = vec![];

        while let Some(row) = self.next().await {
            ret.push(row?);
        }

        Ok(ret)
    }
}

impl fmt::Debug for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl Row {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_by_name(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.get(index)
    }

    pub fn into_values(self) -> ValueRecord {
        self.values
    }

    /// Writes this row's values, positionally, into located fields.
    pub fn scan(self, targets: &mut Targets<'_>) -> Result<()> {
        targets.assign(self.values)
    }
}
