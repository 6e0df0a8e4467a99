use crate::{Interval, Value, ZonedTime, separated_by};
use std::fmt::Write;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format_finite($value));
        } else {
            let _ = write!($out, "{}", $value);
        }
    }};
}

/// Temporal literal kinds, each one rendered through [`GqlWriter::write_value_temporal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date,
    LocalTime,
    ZonedTime,
    LocalDateTime,
    ZonedDateTime,
    Duration,
}

impl Temporal {
    /// ISO GQL literal keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Temporal::Date => "DATE",
            Temporal::LocalTime => "LOCAL TIME",
            Temporal::ZonedTime => "ZONED TIME",
            Temporal::LocalDateTime => "LOCAL DATETIME",
            Temporal::ZonedDateTime => "ZONED DATETIME",
            Temporal::Duration => "DURATION",
        }
    }
}

/// Renders values as graph query literals.
///
/// Every method has a default producing ISO GQL syntax. Drivers implement the
/// trait on a unit struct and override only the pieces where the dialect
/// differs, usually string quoting and [`GqlWriter::write_value_temporal`].
pub trait GqlWriter: Send + Sync {
    fn as_dyn(&self) -> &dyn GqlWriter;

    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Null
            | Value::Boolean(None, ..)
            | Value::Int8(None, ..)
            | Value::Int16(None, ..)
            | Value::Int32(None, ..)
            | Value::Int64(None, ..)
            | Value::UInt8(None, ..)
            | Value::UInt16(None, ..)
            | Value::UInt32(None, ..)
            | Value::UInt64(None, ..)
            | Value::Float32(None, ..)
            | Value::Float64(None, ..)
            | Value::Decimal(None, ..)
            | Value::Varchar(None, ..)
            | Value::Date(None, ..)
            | Value::Time(None, ..)
            | Value::TimeWithTimezone(None, ..)
            | Value::Timestamp(None, ..)
            | Value::TimestampWithTimezone(None, ..)
            | Value::Interval(None, ..)
            | Value::List(None, ..) => self.write_value_none(out),
            Value::Boolean(Some(v), ..) => self.write_value_bool(out, *v),
            Value::Int8(Some(v), ..) => write_integer!(out, *v),
            Value::Int16(Some(v), ..) => write_integer!(out, *v),
            Value::Int32(Some(v), ..) => write_integer!(out, *v),
            Value::Int64(Some(v), ..) => write_integer!(out, *v),
            Value::UInt8(Some(v), ..) => write_integer!(out, *v),
            Value::UInt16(Some(v), ..) => write_integer!(out, *v),
            Value::UInt32(Some(v), ..) => write_integer!(out, *v),
            Value::UInt64(Some(v), ..) => write_integer!(out, *v),
            Value::Float32(Some(v), ..) => write_float!(out, *v),
            Value::Float64(Some(v), ..) => write_float!(out, *v),
            Value::Decimal(Some(v), ..) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(Some(v), ..) => self.write_value_string(out, v),
            Value::Date(Some(v), ..) => {
                let mut text = String::with_capacity(10);
                self.write_value_date(&mut text, v);
                self.write_value_temporal(out, Temporal::Date, &text);
            }
            Value::Time(Some(v), ..) => {
                let mut text = String::with_capacity(18);
                self.write_value_time(&mut text, v);
                self.write_value_temporal(out, Temporal::LocalTime, &text);
            }
            Value::TimeWithTimezone(Some(v), ..) => {
                let mut text = String::with_capacity(24);
                self.write_value_zoned_time(&mut text, v);
                self.write_value_temporal(out, Temporal::ZonedTime, &text);
            }
            Value::Timestamp(Some(v), ..) => {
                let mut text = String::with_capacity(29);
                self.write_value_datetime(&mut text, v);
                self.write_value_temporal(out, Temporal::LocalDateTime, &text);
            }
            Value::TimestampWithTimezone(Some(v), ..) => {
                let mut text = String::with_capacity(35);
                self.write_value_zoned_datetime(&mut text, v);
                self.write_value_temporal(out, Temporal::ZonedDateTime, &text);
            }
            Value::Interval(Some(v), ..) => self.write_value_interval(out, v),
            Value::List(Some(v), ..) => self.write_value_list(out, v),
        }
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL")
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    /// `2024-03-01`
    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    /// `10:20:30`, the fraction is written only when not zero.
    fn write_value_time(&self, out: &mut String, value: &Time) {
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second(),
        );
        let mut subsecond = value.nanosecond();
        if subsecond != 0 {
            let mut width = 9;
            while subsecond % 10 == 0 {
                subsecond /= 10;
                width -= 1;
            }
            let _ = write!(out, ".{:0width$}", subsecond);
        }
    }

    /// `+08:00`, seconds are appended only when not zero (`+05:30:45`).
    fn write_value_offset(&self, out: &mut String, value: &UtcOffset) {
        let seconds = value.whole_seconds();
        let sign = if seconds < 0 { '-' } else { '+' };
        let seconds = seconds.unsigned_abs();
        let _ = write!(out, "{}{:02}:{:02}", sign, seconds / 3600, seconds % 3600 / 60);
        if seconds % 60 != 0 {
            let _ = write!(out, ":{:02}", seconds % 60);
        }
    }

    fn write_value_zoned_time(&self, out: &mut String, value: &ZonedTime) {
        self.write_value_time(out, &value.time);
        self.write_value_offset(out, &value.offset);
    }

    fn write_value_datetime(&self, out: &mut String, value: &PrimitiveDateTime) {
        self.write_value_date(out, &value.date());
        out.push('T');
        self.write_value_time(out, &value.time());
    }

    fn write_value_zoned_datetime(&self, out: &mut String, value: &OffsetDateTime) {
        self.write_value_date(out, &value.date());
        out.push('T');
        self.write_value_time(out, &value.time());
        self.write_value_offset(out, &value.offset());
    }

    fn write_value_interval(&self, out: &mut String, value: &Interval) {
        let text = value.to_string();
        self.write_value_temporal(out, Temporal::Duration, &text);
    }

    /// Wraps the ISO text of a temporal value into its literal syntax.
    fn write_value_temporal(&self, out: &mut String, kind: Temporal, text: &str) {
        out.push_str(kind.keyword());
        out.push_str(" '");
        out.push_str(text);
        out.push('\'');
    }

    fn write_value_list(&self, out: &mut String, value: &[Value]) {
        out.push('[');
        separated_by(
            out,
            value,
            |out, v| {
                self.write_value(out, v);
            },
            ", ",
        );
        out.push(']');
    }
}

/// ISO GQL writer with no dialect overrides.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericGqlWriter;
impl GenericGqlWriter {
    pub fn new() -> Self {
        Self
    }
}
impl GqlWriter for GenericGqlWriter {
    fn as_dyn(&self) -> &dyn GqlWriter {
        self
    }
}
