use std::fmt;

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Timestamp out of range: {0} ms")]
pub struct OutOfRangeError(i64);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        // Truncate to the precision that is actually stored
        Self::try_from_millis(Self(now).as_millis()).unwrap_or(Self(now))
    }

    pub fn try_from_millis(millis: i64) -> Result<Self, OutOfRangeError> {
        let nanos = i128::from(millis) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map(Self)
            .map_err(|_| OutOfRangeError(millis))
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{} ms", self.as_millis()),
        }
    }
}
