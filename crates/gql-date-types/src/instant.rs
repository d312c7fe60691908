//! UTC-normalized instants

use crate::error::CoercionError;
use crate::normalize::text_to_instant;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Timelike, Utc};
use gql_date_parser::format_utc_datetime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Years a Date value can carry, in its canonical four-digit form
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// An absolute point in time, always held in UTC
///
/// Two instants are equal iff they denote the same physical moment; there is
/// no local or unspecified zone state to compare. Precision is nanoseconds.
///
/// The UTC year always lies in [`YEAR_RANGE`], so the canonical text
/// parses back. Serializes as that text, e.g. `2015-12-01T14:15:07.123Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Wrap a UTC date-time; `None` when its year is outside [`YEAR_RANGE`]
    pub fn from_utc(datetime: DateTime<Utc>) -> Option<Self> {
        YEAR_RANGE
            .contains(&datetime.year())
            .then_some(Self(datetime))
    }

    /// Parse Date text, reading offset-less text as UTC
    ///
    /// This is the same grammar and normalization the coercer uses with its
    /// default configuration.
    pub fn parse(text: &str) -> Result<Self, CoercionError> {
        text_to_instant(text, Utc.fix())
    }

    /// The underlying chrono value
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn into_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// UTC calendar date of this instant
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// View this instant at a fixed offset
    pub fn at_offset(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(&offset)
    }

    /// Canonical text: `YYYY-MM-DDTHH:MM:SS[.f]Z`, fraction trimmed
    pub fn to_iso8601(&self) -> String {
        let dt = &self.0;
        format_utc_datetime(
            (dt.year(), dt.month(), dt.day()),
            (dt.hour(), dt.minute(), dt.second()),
            dt.nanosecond(),
        )
    }
}

impl TryFrom<DateTime<Utc>> for Instant {
    type Error = DateTime<Utc>;

    /// Fails with the input when its year is out of range
    fn try_from(datetime: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::from_utc(datetime).ok_or(datetime)
    }
}

impl TryFrom<DateTime<FixedOffset>> for Instant {
    type Error = DateTime<FixedOffset>;

    fn try_from(datetime: DateTime<FixedOffset>) -> Result<Self, Self::Error> {
        Self::from_utc(datetime.with_timezone(&Utc)).ok_or(datetime)
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl From<Instant> for String {
    fn from(instant: Instant) -> Self {
        instant.to_iso8601()
    }
}

impl TryFrom<String> for Instant {
    type Error = CoercionError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl FromStr for Instant {
    type Err = CoercionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
