use sqlscan_core::{driver::TransactionOptions, Error, Result};
use std::borrow::Cow;

/// SQL generator for PostgreSQL transactions. Isolation level and access
/// mode are embedded directly in the `BEGIN` statement.
#[derive(Debug)]
pub(crate) struct TransactionManager {
    active: bool,
}

impl TransactionManager {
    pub(crate) fn new() -> Self {
        Self { active: false }
    }

    /// Returns `BEGIN [ISOLATION LEVEL X] [READ ONLY]`. The manager only
    /// tracks the transaction once [`mark_started`](Self::mark_started) is
    /// called.
    pub(crate) fn start(&self, options: &TransactionOptions) -> Result<Cow<'static, str>> {
        if self.active {
            return Err(Error::unsupported_feature(
                "nested transactions are not supported",
            ));
        }

        let mut sql = String::from("BEGIN");
        if let Some(level) = options.isolation {
            sql.push_str(" ISOLATION LEVEL ");
            sql.push_str(level.sql_name());
        }
        if options.read_only {
            sql.push_str(" READ ONLY");
        }

        Ok(Cow::Owned(sql))
    }

    pub(crate) fn commit(&self) -> Cow<'static, str> {
        Cow::Borrowed("COMMIT")
    }

    pub(crate) fn rollback(&self) -> Cow<'static, str> {
        Cow::Borrowed("ROLLBACK")
    }

    pub(crate) fn mark_started(&mut self) {
        self.active = true;
    }

    pub(crate) fn mark_done(&mut self) {
        self.active = false;
    }
}
