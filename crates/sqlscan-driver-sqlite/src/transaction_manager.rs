use sqlscan_core::{
    driver::{IsolationLevel, TransactionOptions},
    Error, Result,
};
use std::borrow::Cow;

/// SQL generator for SQLite transactions. Only `Serializable` and `None`
/// are accepted; other isolation levels and read-only transactions return
/// an error.
#[derive(Debug)]
pub(crate) struct TransactionManager {
    active: bool,
}

impl TransactionManager {
    pub(crate) fn new() -> Self {
        Self { active: false }
    }

    /// Returns `BEGIN`. Errors for unsupported options or when a transaction
    /// is already open. The manager only tracks the transaction once
    /// [`mark_started`](Self::mark_started) is called.
    pub(crate) fn start(&self, options: &TransactionOptions) -> Result<Cow<'static, str>> {
        if self.active {
            return Err(Error::unsupported_feature(
                "nested transactions are not supported",
            ));
        }

        match options.isolation {
            None | Some(IsolationLevel::Serializable) => {}
            Some(_) => {
                return Err(Error::unsupported_feature(
                    "SQLite only supports Serializable isolation",
                ))
            }
        }

        if options.read_only {
            return Err(Error::unsupported_feature(
                "SQLite does not support read-only transactions",
            ));
        }

        Ok(Cow::Borrowed("BEGIN"))
    }

    pub(crate) fn commit(&self) -> Cow<'static, str> {
        Cow::Borrowed("COMMIT")
    }

    pub(crate) fn rollback(&self) -> Cow<'static, str> {
        Cow::Borrowed("ROLLBACK")
    }

    /// Records that `BEGIN` ran successfully.
    pub(crate) fn mark_started(&mut self) {
        self.active = true;
    }

    /// Records that the open transaction has ended.
    pub(crate) fn mark_done(&mut self) {
        self.active = false;
    }
}
