mod transaction_manager;
use transaction_manager::TransactionManager;

mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use sqlscan_core::{
    async_trait,
    driver::{Connection, ExecResult, Rows, TransactionOptions},
    stmt::{self, ValueRecord},
    Error, Result,
};
use std::path::Path;
use tracing::debug;
use url::Url;

/// A SQLite database connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: RusqliteConnection,
    transaction: TransactionManager,
}

impl Sqlite {
    /// Opens the database named by a `sqlite:` URL.
    ///
    /// `sqlite::memory:` opens a fresh in-memory database; `sqlite:<path>`
    /// opens (or creates) the file at `path`.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if parsed.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(parsed.path())
        }
    }

    /// Opens an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::from(connection))
    }

    /// Opens a database file at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::from(connection))
    }

    fn batch(&mut self, sql: &str) -> Result<()> {
        debug!(sql, "sqlite transaction statement");
        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    /// Runs `COMMIT` or `ROLLBACK`, releasing the transaction once SQLite is
    /// back in autocommit mode.
    fn finish(&mut self, sql: &str) -> Result<()> {
        let res = self.batch(sql);

        if res.is_ok() || self.connection.is_autocommit() {
            self.transaction.mark_done();
        }

        res
    }
}

impl From<RusqliteConnection> for Sqlite {
    fn from(connection: RusqliteConnection) -> Self {
        Self {
            connection,
            transaction: TransactionManager::new(),
        }
    }
}

#[async_trait]
impl Connection for Sqlite {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let params = params.iter().map(Value::from).collect::<Vec<_>>();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        // SQLite steps synchronously, so the whole result set is read here
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                items.push(Value::from_sql(row, index)?);
            }

            ret.push(ValueRecord::from_vec(items));
        }

        Ok(Rows::from_vec(columns, ret))
    }

    async fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<ExecResult> {
        let params = params.iter().map(Value::from).collect::<Vec<_>>();

        let count = self
            .connection
            .execute(sql, rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(ExecResult {
            rows_affected: count as u64,
        })
    }

    async fn begin(&mut self, options: &TransactionOptions) -> Result<()> {
        let sql = self.transaction.start(options)?;
        self.batch(&sql)?;
        self.transaction.mark_started();
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let sql = self.transaction.commit();
        self.finish(&sql)
    }

    async fn rollback(&mut self) -> Result<()> {
        let sql = self.transaction.rollback();
        self.finish(&sql)
    }
}
