use time::{Time, UtcOffset};

/// Time of day with a fixed UTC offset (`ZONED TIME`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonedTime {
    pub time: Time,
    pub offset: UtcOffset,
}

impl ZonedTime {
    pub const fn new(time: Time, offset: UtcOffset) -> Self {
        Self { time, offset }
    }

    /// Same instant expressed with a different offset, wrapping around midnight.
    pub fn to_offset(&self, offset: UtcOffset) -> Self {
        let delta = offset.whole_seconds() as i64 - self.offset.whole_seconds() as i64;
        Self {
            time: self.time + time::Duration::seconds(delta),
            offset,
        }
    }
}
