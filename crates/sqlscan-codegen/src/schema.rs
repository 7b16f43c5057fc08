mod db_attr;
pub(crate) use db_attr::DbAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod record;
pub(crate) use record::Record;
