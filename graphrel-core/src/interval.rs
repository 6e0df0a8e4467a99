use crate::{Error, Result};
use std::{
    fmt::{self, Display, Formatter, Write},
    hash::Hash,
    time::Duration,
};

/// A calendar aware duration (`DURATION`): months, days and a sub-day part.
///
/// Months and days are kept apart from the nanoseconds because their length
/// depends on the date they are applied to.
#[derive(Default, Debug, Clone, Copy)]
pub struct Interval {
    pub months: i64,
    pub days: i64,
    pub nanos: i128,
}

impl Interval {
    pub const NANOS_IN_SEC: i128 = 1_000_000_000;
    pub const NANOS_IN_MIN: i128 = Self::NANOS_IN_SEC * 60;
    pub const NANOS_IN_HOUR: i128 = Self::NANOS_IN_MIN * 60;
    pub const NANOS_IN_DAY: i128 = Self::NANOS_IN_HOUR * 24;
    pub const DAYS_IN_MONTH: f64 = 30.436875;
    pub const ZERO: Interval = Interval::new(0, 0, 0);

    pub const fn new(months: i64, days: i64, nanos: i128) -> Self {
        Self {
            months,
            days,
            nanos,
        }
    }

    pub const fn from_duration(duration: &Duration) -> Self {
        Self::from_nanos(duration.as_nanos() as i128)
    }

    pub const fn from_nanos(nanos: i128) -> Self {
        Self {
            months: 0,
            days: (nanos / Self::NANOS_IN_DAY) as _,
            nanos: nanos % Self::NANOS_IN_DAY,
        }
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self::from_nanos(secs as i128 * Self::NANOS_IN_SEC)
    }

    pub const fn from_mins(mins: i64) -> Self {
        Self::from_nanos(mins as i128 * Self::NANOS_IN_MIN)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::from_nanos(hours as i128 * Self::NANOS_IN_HOUR)
    }

    pub const fn from_days(days: i64) -> Self {
        Self::new(0, days, 0)
    }

    pub const fn from_months(months: i64) -> Self {
        Self::new(months, 0, 0)
    }

    pub const fn from_years(years: i64) -> Self {
        Self::new(years * 12, 0, 0)
    }

    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.nanos == 0
    }

    /// Approximates the months with `days_in_month` days each. Fails when the
    /// total is negative or does not fit a [`Duration`].
    pub fn as_duration(&self, days_in_month: f64) -> Result<Duration> {
        let months = (self.months as f64) * days_in_month * (Self::NANOS_IN_DAY as f64);
        let total = (months as i128)
            .checked_add(self.days as i128 * Self::NANOS_IN_DAY)
            .and_then(|v| v.checked_add(self.nanos))
            .ok_or_else(|| Error::msg(format!("Duration `{}` overflows", self)))?;
        if total < 0 {
            return Err(Error::msg(format!(
                "Duration `{}` is negative and cannot be converted to {}",
                self,
                std::any::type_name::<Duration>()
            )));
        }
        let secs = u64::try_from(total / Self::NANOS_IN_SEC).map_err(|_| {
            Error::msg(format!(
                "Duration `{}` is too large for {}",
                self,
                std::any::type_name::<Duration>()
            ))
        })?;
        Ok(Duration::new(secs, (total % Self::NANOS_IN_SEC) as u32))
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.months == other.months
            && self.days as i128 * Self::NANOS_IN_DAY + self.nanos
                == other.days as i128 * Self::NANOS_IN_DAY + other.nanos
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.months.hash(state);
        (self.days as i128 * Self::NANOS_IN_DAY + self.nanos).hash(state);
    }
}

impl From<Duration> for Interval {
    fn from(value: Duration) -> Self {
        Self::from_duration(&value)
    }
}

/// ISO-8601 duration, for example `P1Y2M3DT4H5M6.5S`.
impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        f.write_char('P')?;
        let (years, months) = (self.months / 12, self.months % 12);
        if years != 0 {
            write!(f, "{}Y", years)?;
        }
        if months != 0 {
            write!(f, "{}M", months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.nanos == 0 {
            return Ok(());
        }
        f.write_char('T')?;
        let hours = self.nanos / Self::NANOS_IN_HOUR;
        let minutes = self.nanos % Self::NANOS_IN_HOUR / Self::NANOS_IN_MIN;
        let seconds = self.nanos % Self::NANOS_IN_MIN / Self::NANOS_IN_SEC;
        let subsecond = self.nanos % Self::NANOS_IN_SEC;
        if hours != 0 {
            write!(f, "{}H", hours)?;
        }
        if minutes != 0 {
            write!(f, "{}M", minutes)?;
        }
        if seconds != 0 || subsecond != 0 {
            if seconds == 0 && subsecond < 0 {
                f.write_char('-')?;
            }
            write!(f, "{}", seconds)?;
            if subsecond != 0 {
                let mut subsecond = subsecond.abs();
                let mut width = 9;
                while subsecond % 10 == 0 {
                    subsecond /= 10;
                    width -= 1;
                }
                write!(f, ".{:0width$}", subsecond)?;
            }
            f.write_char('S')?;
        }
        Ok(())
    }
}
