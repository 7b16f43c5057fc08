use super::{Field, Target};
use crate::{schema::FieldKind, stmt::Value, Error, Result};

use uuid::Uuid;

/// A scalar field that a result value can be written into.
pub trait Assign: Send {
    fn assign(&mut self, value: Value) -> Result<()>;
}

macro_rules! impl_scalar_field {
    ( $($t:ty),+ ) => {
        $(
            impl Field for $t {
                const KIND: FieldKind = FieldKind::Scalar;

                fn target(&mut self) -> Target<'_> {
                    Target::Scalar(self)
                }
            }
        )+
    };
}

impl_scalar_field!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>, Uuid);

macro_rules! impl_assign_int {
    ( $($t:ty),+ ) => {
        $(
            impl Assign for $t {
                fn assign(&mut self, value: Value) -> Result<()> {
                    let converted = value.as_i64().and_then(|v| <$t>::try_from(v).ok());

                    match converted {
                        Some(v) => {
                            *self = v;
                            Ok(())
                        }
                        None => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }
            }
        )+
    };
}

impl_assign_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Assign for bool {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = match value {
            Value::Bool(v) => v,
            // SQLite stores booleans as 0 / 1
            _ => match value.as_i64() {
                Some(0) => false,
                Some(1) => true,
                _ => return Err(Error::type_conversion(value, "bool")),
            },
        };
        Ok(())
    }
}

impl Assign for f32 {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = match value {
            Value::F32(v) => v,
            Value::F64(v) => v as f32,
            value => return Err(Error::type_conversion(value, "f32")),
        };
        Ok(())
    }
}

impl Assign for f64 {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = match value {
            Value::F32(v) => v.into(),
            Value::F64(v) => v,
            value => return Err(Error::type_conversion(value, "f64")),
        };
        Ok(())
    }
}

impl Assign for String {
    fn assign(&mut self, value: Value) -> Result<()> {
        match value {
            Value::String(v) => {
                *self = v;
                Ok(())
            }
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Assign for Vec<u8> {
    fn assign(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Bytes(v) => {
                *self = v;
                Ok(())
            }
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl Assign for Uuid {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = match value {
            Value::Uuid(v) => v,
            // SQLite has no UUID type; uuids round-trip as text
            Value::String(v) => match v.parse() {
                Ok(id) => id,
                Err(_) => return Err(Error::type_conversion(Value::String(v), "Uuid")),
            },
            value => return Err(Error::type_conversion(value, "Uuid")),
        };
        Ok(())
    }
}

impl<T: Field> Assign for Option<T> {
    fn assign(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        let mut inner = T::default();
        match inner.target() {
            Target::Scalar(slot) => slot.assign(value)?,
            Target::Record(_) => return Err(Error::type_conversion(value, "record")),
        }
        *self = Some(inner);
        Ok(())
    }
}
