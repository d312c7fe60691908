//! Parsed date/time literal components

use gql_date_diagnostics::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw components of a date or date-time literal
///
/// Values are exactly as written; nothing has been range-checked yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeLiteral {
    /// Year (4 digits)
    pub year: u16,
    /// Month (2 digits)
    pub month: u8,
    /// Day (2 digits)
    pub day: u8,
    /// Time of day, absent for date-only literals
    pub time: Option<TimeOfDay>,
    /// UTC offset in minutes (`Z` is 0), absent when not written
    pub timezone_offset: Option<i16>,
    /// Where the offset designator starts, if present
    pub offset_start: Option<usize>,
}

/// Time-of-day components of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    /// Zero when seconds were omitted
    pub second: u8,
    /// Fraction scaled to nanoseconds: ".5" is 500_000_000
    pub nanosecond: u32,
}

/// Component of a literal, used to locate range errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Offset,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
            Self::Hour => write!(f, "hour"),
            Self::Minute => write!(f, "minute"),
            Self::Second => write!(f, "second"),
            Self::Offset => write!(f, "UTC offset"),
        }
    }
}

impl DateTimeLiteral {
    /// Create a date-only literal
    pub fn date(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
            timezone_offset: None,
            offset_start: None,
        }
    }

    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_timezone(mut self, offset_minutes: i16) -> Self {
        self.timezone_offset = Some(offset_minutes);
        self
    }

    /// Check whether this literal has a time-of-day part
    pub fn is_date_only(&self) -> bool {
        self.time.is_none()
    }

    /// Byte span of a component in the source text
    ///
    /// Date and time fields sit at fixed positions in the grammar. Returns
    /// `None` for components the literal does not contain.
    pub fn span_of(&self, component: Component) -> Option<Span> {
        let fixed = |start: usize, len: usize| Some(Span::new(start, start + len));
        match component {
            Component::Year => fixed(0, 4),
            Component::Month => fixed(5, 2),
            Component::Day => fixed(8, 2),
            Component::Hour => self.time.as_ref().and(fixed(11, 2)),
            Component::Minute => self.time.as_ref().and(fixed(14, 2)),
            Component::Second => self.time.as_ref().and(fixed(17, 2)),
            Component::Offset => self.offset_start.map(Span::point),
        }
    }
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond: 0,
        }
    }

    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }
}

impl fmt::Display for DateTimeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let Some(time) = &self.time {
            write!(f, "T{}", time)?;
            if let Some(offset) = self.timezone_offset {
                if offset == 0 {
                    write!(f, "Z")?;
                } else {
                    let hours = offset.abs() / 60;
                    let mins = offset.abs() % 60;
                    let sign = if offset >= 0 { '+' } else { '-' };
                    write!(f, "{}{:02}:{:02}", sign, hours, mins)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}",
            self.hour,
            self.minute,
            self.second,
            crate::format::fraction(self.nanosecond)
        )
    }
}
