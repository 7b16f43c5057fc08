use crate::{Capability, ConnectionLog, LoggingConnection, Setup};

use sqlscan::Db;
use std::{future::Future, pin::Pin};

/// Runs one test body against one backend.
///
/// Owns a current-thread runtime so tests can use `#[test]`, and records
/// every statement the test's `Db` sends to the driver.
pub struct DbTest {
    setup: Box<dyn Setup>,
    log: ConnectionLog,
}

impl DbTest {
    pub fn new(setup: Box<dyn Setup>) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            setup,
            log: ConnectionLog::default(),
        }
    }

    /// Connects a `Db` whose statements are recorded in [`DbTest::log`].
    pub async fn setup_db(&mut self) -> Db {
        let connection = self
            .setup
            .connect()
            .await
            .expect("failed to connect to the test database");

        let connection = LoggingConnection::new(connection);
        self.log = connection.log();

        Db::new(connection)
    }

    /// Statements sent by the most recently connected `Db`.
    pub fn log(&self) -> &ConnectionLog {
        &self.log
    }

    pub fn capability(&self) -> &Capability {
        self.setup.capability()
    }

    pub fn run_test<F>(mut self, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        runtime.block_on(test_fn(&mut self));
    }
}
