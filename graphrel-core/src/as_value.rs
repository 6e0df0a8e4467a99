use crate::{Error, Interval, Result, UsageError, Value, ZonedTime};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use std::{any, borrow::Cow, fmt::Display, time::Duration};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Conversion between native Rust types and the dynamically typed [`Value`].
///
/// It is used in both directions: `as_value` when binding query parameters and
/// `try_from_value` when reading a column out of a [`crate::Cursor`].
///
/// # Coercion contract
/// - The canonical variant of the type is always accepted (`Value::Int32` for
///   `i32`).
/// - Integers accept every integer variant, the conversion fails when the
///   number does not fit instead of truncating it.
/// - Floats accept integers only when the integer is represented exactly, and
///   `f32` rejects a finite `f64` outside its range.
/// - A request that does not make sense for the stored kind fails with
///   [`UsageError::TypeCoercion`] carrying the stored kind and the kind the
///   requested type maps to.
/// - Nulls can only be read through `Option<T>`.
///
/// # Examples
/// ```rust
/// use graphrel_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The null of the variant this type maps to.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

pub(crate) fn coercion_error<T: AsValue>(value: &Value) -> Error {
    Error::new(UsageError::TypeCoercion {
        stored: value.kind_name(),
        requested: T::as_empty_value().kind_name(),
    })
}

fn narrow<S, T>(v: S, kind: &str) -> Result<T>
where
    S: Copy + Display,
    T: TryFrom<S>,
{
    T::try_from(v).map_err(|_| {
        Error::msg(format!(
            "Value {v}: {kind} is out of range for {}",
            any::type_name::<T>(),
        ))
    })
}

/// The float must represent the integer exactly.
fn exact_f64<S: Copy + Display + Into<i128>>(v: S, kind: &str) -> Result<f64> {
    let wide: i128 = v.into();
    let result = wide as f64;
    if result as i128 != wide {
        return Err(Error::msg(format!(
            "Value {v}: {kind} cannot be represented exactly by f64"
        )));
    }
    Ok(result)
}

fn finite_f32(v: f64) -> Result<f32> {
    let result = v as f32;
    if v.is_finite() && !result.is_finite() {
        return Err(Error::msg(format!(
            "Value {v}: FLOAT64 is out of range for f32"
        )));
    }
    Ok(result)
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            #[allow(unreachable_patterns)]
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v),
                    $($pat_rest => $expr_rest,)*
                    _ => Err(coercion_error::<Self>(&value)),
                }
            }
        }
    };
}

macro_rules! impl_as_value_integer {
    ($source:ty, $destination:path) => {
        impl_as_value!(
            $source,
            $destination,
            Value::Int8(Some(v)) => narrow(v, "INT8"),
            Value::Int16(Some(v)) => narrow(v, "INT16"),
            Value::Int32(Some(v)) => narrow(v, "INT32"),
            Value::Int64(Some(v)) => narrow(v, "INT64"),
            Value::UInt8(Some(v)) => narrow(v, "UINT8"),
            Value::UInt16(Some(v)) => narrow(v, "UINT16"),
            Value::UInt32(Some(v)) => narrow(v, "UINT32"),
            Value::UInt64(Some(v)) => narrow(v, "UINT64"),
        );
    };
}

impl_as_value_integer!(i8, Value::Int8);
impl_as_value_integer!(i16, Value::Int16);
impl_as_value_integer!(i32, Value::Int32);
impl_as_value_integer!(i64, Value::Int64);
impl_as_value_integer!(u8, Value::UInt8);
impl_as_value_integer!(u16, Value::UInt16);
impl_as_value_integer!(u32, Value::UInt32);
impl_as_value_integer!(u64, Value::UInt64);

impl_as_value!(
    bool,
    Value::Boolean,
    Value::Int8(Some(v)) => Ok(v != 0),
    Value::Int16(Some(v)) => Ok(v != 0),
    Value::Int32(Some(v)) => Ok(v != 0),
    Value::Int64(Some(v)) => Ok(v != 0),
    Value::UInt8(Some(v)) => Ok(v != 0),
    Value::UInt16(Some(v)) => Ok(v != 0),
    Value::UInt32(Some(v)) => Ok(v != 0),
    Value::UInt64(Some(v)) => Ok(v != 0),
);
impl_as_value!(
    f32,
    Value::Float32,
    Value::Float64(Some(v)) => finite_f32(v),
    Value::Int8(Some(v)) => Ok(v as _),
    Value::Int16(Some(v)) => Ok(v as _),
    Value::UInt8(Some(v)) => Ok(v as _),
    Value::UInt16(Some(v)) => Ok(v as _),
);
impl_as_value!(
    f64,
    Value::Float64,
    Value::Float32(Some(v)) => Ok(v as _),
    Value::Int8(Some(v)) => Ok(v as _),
    Value::Int16(Some(v)) => Ok(v as _),
    Value::Int32(Some(v)) => Ok(v as _),
    Value::Int64(Some(v)) => exact_f64(v, "INT64"),
    Value::UInt8(Some(v)) => Ok(v as _),
    Value::UInt16(Some(v)) => Ok(v as _),
    Value::UInt32(Some(v)) => Ok(v as _),
    Value::UInt64(Some(v)) => exact_f64(v, "UINT64"),
    Value::Decimal(Some(v)) => v
        .to_f64()
        .ok_or_else(|| Error::msg(format!("Cannot convert the Decimal value `{}` to f64", v))),
);
impl_as_value!(
    Decimal,
    Value::Decimal,
    Value::Int8(Some(v)) => Ok(v.into()),
    Value::Int16(Some(v)) => Ok(v.into()),
    Value::Int32(Some(v)) => Ok(v.into()),
    Value::Int64(Some(v)) => Ok(v.into()),
    Value::UInt8(Some(v)) => Ok(v.into()),
    Value::UInt16(Some(v)) => Ok(v.into()),
    Value::UInt32(Some(v)) => Ok(v.into()),
    Value::UInt64(Some(v)) => Ok(v.into()),
    Value::Float32(Some(v)) => Decimal::from_f32(v)
        .ok_or_else(|| Error::msg(format!("Cannot convert the f32 value `{}` to Decimal", v))),
    Value::Float64(Some(v)) => Decimal::from_f64(v)
        .ok_or_else(|| Error::msg(format!("Cannot convert the f64 value `{}` to Decimal", v))),
);
impl_as_value!(String, Value::Varchar);
impl_as_value!(Date, Value::Date);
impl_as_value!(Time, Value::Time);
impl_as_value!(ZonedTime, Value::TimeWithTimezone);
impl_as_value!(
    PrimitiveDateTime,
    Value::Timestamp,
    Value::TimestampWithTimezone(Some(v)) => Ok(PrimitiveDateTime::new(v.date(), v.time())),
);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone);
impl_as_value!(Interval, Value::Interval);

impl AsValue for Duration {
    fn as_empty_value() -> Value {
        Value::Interval(None)
    }
    fn as_value(self) -> Value {
        Value::Interval(Some(Interval::from_duration(&self)))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Interval(Some(v)) => {
                if v.months != 0 {
                    return Err(Error::msg(format!(
                        "Duration `{}` has a calendar part and cannot be converted to {}",
                        v,
                        any::type_name::<Self>()
                    )));
                }
                v.as_duration(Interval::DAYS_IN_MONTH)
            }
            _ => Err(coercion_error::<Self>(&value)),
        }
    }
}

impl<'a> AsValue for Cow<'a, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Into::into)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_empty_value() -> Value {
        Value::List(None, Box::new(T::as_empty_value()))
    }
    fn as_value(self) -> Value {
        Value::List(
            Some(self.into_iter().map(AsValue::as_value).collect()),
            Box::new(T::as_empty_value()),
        )
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(Some(v), ..) => v.into_iter().map(T::try_from_value).collect(),
            _ => Err(coercion_error::<Self>(&value)),
        }
    }
}
