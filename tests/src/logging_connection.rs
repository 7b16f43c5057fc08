use sqlscan::{
    driver::{Connection, ExecResult, Rows, TransactionOptions},
    stmt::Value,
    Result,
};
use sqlscan_core::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tokio_stream::StreamExt;

/// One call made on a [`LoggingConnection`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionOp {
    Query { sql: String, params: Vec<Value> },
    Execute { sql: String, params: Vec<Value> },
    Begin(TransactionOptions),
    Commit,
    Rollback,
}

impl ConnectionOp {
    pub fn sql(&self) -> Option<&str> {
        match self {
            ConnectionOp::Query { sql, .. } | ConnectionOp::Execute { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// Shared handle on the calls recorded by a [`LoggingConnection`].
#[derive(Debug, Clone, Default)]
pub struct ConnectionLog {
    ops: Arc<Mutex<Vec<ConnectionOp>>>,

    /// Result sets returned and not yet dropped
    open_rows: Arc<AtomicUsize>,
}

impl ConnectionLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// All recorded calls, oldest first
    pub fn ops(&self) -> Vec<ConnectionOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Removes and returns the most recent call
    pub fn pop(&self) -> Option<ConnectionOp> {
        self.ops.lock().unwrap().pop()
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Number of result sets handed out that have not been dropped
    pub fn open_rows(&self) -> usize {
        self.open_rows.load(Ordering::SeqCst)
    }

    fn push(&self, op: ConnectionOp) {
        self.ops.lock().unwrap().push(op);
    }
}

/// A connection wrapper that records every call before delegating it.
#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    log: ConnectionLog,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>) -> Self {
        Self {
            inner,
            log: ConnectionLog::default(),
        }
    }

    pub fn log(&self) -> ConnectionLog {
        self.log.clone()
    }
}

/// Counts a result set as open until dropped.
struct OpenRows(Arc<AtomicUsize>);

impl OpenRows {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for OpenRows {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.log.push(ConnectionOp::Query {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        let rows = self.inner.query(sql, params).await?;
        let columns = rows.columns().to_vec();
        let open = OpenRows::new(self.log.open_rows.clone());

        let stream = rows.into_stream().map(move |record| {
            let _open = &open;
            record
        });

        Ok(Rows::from_stream(columns, stream))
    }

    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        self.log.push(ConnectionOp::Execute {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        self.inner.execute(sql, params).await
    }

    async fn begin(&mut self, options: &TransactionOptions) -> Result<()> {
        self.log.push(ConnectionOp::Begin(*options));
        self.inner.begin(options).await
    }

    async fn commit(&mut self) -> Result<()> {
        self.log.push(ConnectionOp::Commit);
        self.inner.commit().await
    }

    async fn rollback(&mut self) -> Result<()> {
        self.log.push(ConnectionOp::Rollback);
        self.inner.rollback().await
    }
}
