use sqlscan_core::stmt::Value as CoreValue;
use tokio_postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

use std::error::Error;

type BoxError = Box<dyn Error + Sync + Send>;

/// A parameter value borrowed for binding to a PostgreSQL statement.
///
/// Integers are converted to the width the server inferred for the
/// parameter, failing when the value does not fit.
#[derive(Debug)]
pub(crate) struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::Bool(value) => value.to_sql(ty, out),
            CoreValue::I16(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::I32(value) => int_to_sql(i64::from(*value), ty, out),
            CoreValue::I64(value) => int_to_sql(*value, ty, out),
            CoreValue::F32(value) => match *ty {
                Type::FLOAT8 => f64::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::String(value) => value.to_sql(ty, out),
            CoreValue::Bytes(value) => value.to_sql(ty, out),
            CoreValue::Uuid(value) => match *ty {
                Type::UUID => value.to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
        }
    }

    accepts!(BOOL, INT2, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR, BPCHAR, NAME, BYTEA, UUID);
    to_sql_checked!();
}

fn int_to_sql(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        _ => value.to_sql(ty, out),
    }
}
