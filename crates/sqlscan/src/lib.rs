//! Scan query results into structs.
//!
//! A struct deriving [`Record`] describes which result columns its fields
//! take. [`Executor::get`] fills one record from a single-row query and
//! [`Executor::select`] appends one record per row to a `Vec`.
//!
//! ```ignore
//! #[derive(Debug, Default, sqlscan::Record)]
//! struct User {
//!     #[db("id")]
//!     id: i64,
//!     #[db("name")]
//!     name: String,
//! }
//!
//! let mut db = Db::connect("sqlite::memory:").await?;
//! let mut users: Vec<User> = vec![];
//! db.select(&mut users, "SELECT id, name FROM users", &[]).await?;
//! ```

pub mod db;
pub use db::Db;

mod executor;
pub use executor::Executor;

mod transaction;
pub use transaction::{Transaction, TransactionBuilder};

pub use sqlscan_core::{
    bail,
    driver::{self, Connection, ExecResult, IsolationLevel, Row, Rows, TransactionOptions},
    err,
    scan::{column_names, element_shape, locate, Targets},
    schema::{self, Shape},
    stmt::{self, Value},
    Error, Field, Result,
};

pub use sqlscan_core::Record;
pub use sqlscan_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use sqlscan_core::{
        scan::{Field, Record, Target},
        schema::{FieldKind, FieldShape, Shape, Tag},
    };
}
